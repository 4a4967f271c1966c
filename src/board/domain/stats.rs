//! Task counts for the dashboard.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Counts of tasks by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// All tasks.
    pub total: usize,
    /// Tasks in [`TaskStatus::Done`].
    pub completed: usize,
    /// Tasks in [`TaskStatus::InProgress`].
    pub in_progress: usize,
}

impl TaskStatistics {
    /// Counts the given tasks in a single pass.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        tasks
            .into_iter()
            .fold(Self::default(), |mut stats, task| {
                stats.total += 1;
                match task.status() {
                    TaskStatus::Done => stats.completed += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::ToDo => {}
                }
                stats
            })
    }

    /// Tasks that are neither done nor in progress.
    #[must_use]
    pub const fn to_do(&self) -> usize {
        self.total
            .saturating_sub(self.completed)
            .saturating_sub(self.in_progress)
    }
}
