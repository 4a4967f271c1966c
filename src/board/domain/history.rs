//! Append-only task history and the recent-activity view built from it.

use super::{TaskId, TaskStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Title shown for activity whose task has since been deleted.
pub const UNKNOWN_TASK_TITLE: &str = "Unknown Task";

/// Name shown for activity whose user has since been deleted.
pub const UNKNOWN_USER_NAME: &str = "Unknown User";

/// Number of entries returned by the recent-activity feed by default.
pub const DEFAULT_RECENT_ACTIVITY_LIMIT: usize = 5;

/// What happened to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum HistoryAction {
    /// The task was created.
    Created,
    /// One or more fields changed without a status change.
    Updated,
    /// The status moved to a new column.
    StatusChanged(TaskStatus),
}

impl fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::Updated => f.write_str("updated"),
            Self::StatusChanged(status) => write!(f, "status changed to {status}"),
        }
    }
}

/// One immutable history record.
///
/// `sequence` is assigned by the store in insertion order and breaks ties
/// between entries with equal timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    sequence: u64,
    task_id: TaskId,
    action: HistoryAction,
    user_id: UserId,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates a history entry.
    #[must_use]
    pub const fn new(
        sequence: u64,
        task_id: TaskId,
        action: HistoryAction,
        user_id: UserId,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            sequence,
            task_id,
            action,
            user_id,
            timestamp,
        }
    }

    /// Returns the insertion sequence number.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the task the entry belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the recorded action.
    #[must_use]
    pub const fn action(&self) -> HistoryAction {
        self.action
    }

    /// Returns the user the action is attributed to.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns when the action happened.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Orders entries newest first, falling back to insertion order.
#[must_use]
pub fn newest_first(left: &HistoryEntry, right: &HistoryEntry) -> Ordering {
    right
        .timestamp
        .cmp(&left.timestamp)
        .then_with(|| right.sequence.cmp(&left.sequence))
}

/// A history entry joined with display names for a dashboard feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivity {
    /// Task the activity belongs to.
    pub task_id: TaskId,
    /// Task title, or [`UNKNOWN_TASK_TITLE`].
    pub task_title: String,
    /// Rendered action label, e.g. `status changed to Done`.
    pub action: String,
    /// User the activity is attributed to.
    pub user_id: UserId,
    /// User name, or [`UNKNOWN_USER_NAME`].
    pub user_name: String,
    /// When the activity happened.
    pub timestamp: DateTime<Utc>,
}

impl RecentActivity {
    /// Joins `entry` with the titles and names found for it.
    #[must_use]
    pub fn join(entry: &HistoryEntry, task_title: Option<&str>, user_name: Option<&str>) -> Self {
        Self {
            task_id: entry.task_id,
            task_title: task_title.unwrap_or(UNKNOWN_TASK_TITLE).to_owned(),
            action: entry.action.to_string(),
            user_id: entry.user_id,
            user_name: user_name.unwrap_or(UNKNOWN_USER_NAME).to_owned(),
            timestamp: entry.timestamp,
        }
    }
}
