//! Dependency graph queries over `blocked_by` edges.
//!
//! An edge `blocker -> task` exists when `task.blocked_by()` contains
//! `blocker`. The functions here walk edges backwards, from a task to its
//! blockers, and take a lookup closure so they work against any task index.
//! Lookups returning `None` (for example a blocker that has been deleted)
//! end the walk along that branch.

use super::{Task, TaskId};
use std::collections::{BTreeSet, HashSet};

/// Returns `true` when `target` can be reached from `start` by following
/// blocker edges, or when the two are the same task.
///
/// Each task is expanded at most once, so shared sub-graphs are not
/// revisited.
pub fn reaches<'a, F>(start: TaskId, target: TaskId, blockers_of: F) -> bool
where
    F: Fn(TaskId) -> Option<&'a BTreeSet<TaskId>>,
{
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if current == target {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(blockers) = blockers_of(current) {
            stack.extend(blockers.iter().filter(|id| !visited.contains(*id)));
        }
    }

    false
}

/// Returns `true` when making `blocker` block `task` would close a cycle.
///
/// That is the case when `task` already (transitively) blocks `blocker`.
pub fn would_create_cycle<'a, F>(task: TaskId, blocker: TaskId, blockers_of: F) -> bool
where
    F: Fn(TaskId) -> Option<&'a BTreeSet<TaskId>>,
{
    reaches(blocker, task, blockers_of)
}

/// Collects every task that transitively blocks `task`, excluding `task`
/// itself. Identifiers are returned in ascending order.
pub fn transitive_blockers<'a, F>(task: TaskId, blockers_of: F) -> BTreeSet<TaskId>
where
    F: Fn(TaskId) -> Option<&'a BTreeSet<TaskId>>,
{
    let mut found = BTreeSet::new();
    let mut stack: Vec<TaskId> = blockers_of(task)
        .map(|blockers| blockers.iter().copied().collect())
        .unwrap_or_default();

    while let Some(current) = stack.pop() {
        if current == task || !found.insert(current) {
            continue;
        }
        if let Some(blockers) = blockers_of(current) {
            stack.extend(blockers.iter().filter(|id| !found.contains(*id)));
        }
    }

    found
}

/// Returns `true` when any of the given blockers is not yet done.
///
/// Only the supplied tasks are inspected; blocking is not derived
/// transitively.
pub fn any_unfinished<'a>(blockers: impl IntoIterator<Item = &'a Task>) -> bool {
    blockers
        .into_iter()
        .any(|blocker| !blocker.status().is_done())
}
