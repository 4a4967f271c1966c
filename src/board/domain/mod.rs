//! Domain model for the task board.
//!
//! Users, tasks, the task history log, and the dependency graph between
//! tasks. Everything here is free of storage and locking concerns.

mod error;
pub mod graph;
mod history;
mod ids;
mod stats;
mod task;
mod user;

pub use error::{ParseIdError, ParsePriorityError, ParseRoleError, ParseTaskStatusError};
pub use history::{
    DEFAULT_RECENT_ACTIVITY_LIMIT, HistoryAction, HistoryEntry, RecentActivity,
    UNKNOWN_TASK_TITLE, UNKNOWN_USER_NAME, newest_first,
};
pub use ids::{IdSequence, TaskId, UserId};
pub use stats::TaskStatistics;
pub use task::{NewTask, PersistedTaskData, Priority, Task, TaskPatch, TaskStatus};
pub use user::{NewUser, Role, User, UserPatch};
