//! Store port for users, tasks, task history, and task dependencies.

use crate::board::domain::{
    HistoryEntry, NewTask, NewUser, RecentActivity, Task, TaskId, TaskPatch, TaskStatistics,
    User, UserId, UserPatch,
};
use std::sync::Arc;
use thiserror::Error;

/// Result type for board store operations.
pub type BoardStoreResult<T> = Result<T, BoardStoreError>;

/// Board persistence contract.
///
/// Implementations own all board entities and enforce referential and graph
/// invariants. Field shapes (title length, email format, ...) are expected to
/// be validated by the caller. Each operation is atomic: a task update and
/// its history entry are never observable apart.
pub trait BoardStore: Send + Sync {
    /// Returns all users ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn list_users(&self) -> BoardStoreResult<Vec<User>>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn find_user(&self, id: UserId) -> BoardStoreResult<Option<User>>;

    /// Stores a new user under the next sequential identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn create_user(&self, user: NewUser) -> BoardStoreResult<User>;

    /// Merges `patch` into an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UserNotFound`] when the user does not exist.
    fn update_user(&self, id: UserId, patch: UserPatch) -> BoardStoreResult<User>;

    /// Removes a user that has no assigned tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UserHasTasks`] when tasks are still assigned
    /// to the user, or [`BoardStoreError::UserNotFound`] when the user does
    /// not exist.
    fn delete_user(&self, id: UserId) -> BoardStoreResult<()>;

    /// Returns all tasks ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn list_tasks(&self) -> BoardStoreResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn find_task(&self, id: TaskId) -> BoardStoreResult<Option<Task>>;

    /// Stores a new task in `To Do` and records a `created` history entry
    /// attributed to the assignee.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::UserNotFound`] when the assignee does not
    /// exist.
    fn create_task(&self, task: NewTask) -> BoardStoreResult<Task>;

    /// Merges `patch` into an existing task and records exactly one history
    /// entry attributed to `acting_user`.
    ///
    /// The entry is `status changed to <status>` when the status changed and
    /// `updated` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`] when the task does not exist,
    /// or [`BoardStoreError::UserNotFound`] when the patch reassigns the task
    /// to an unknown user.
    fn update_task(
        &self,
        id: TaskId,
        patch: TaskPatch,
        acting_user: UserId,
    ) -> BoardStoreResult<Task>;

    /// Removes a task together with its own history.
    ///
    /// Other tasks keep any `blocked_by` edge pointing at the removed task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::TaskNotFound`] when the task does not exist.
    fn delete_task(&self, id: TaskId) -> BoardStoreResult<()>;

    /// Returns the history of one task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn task_history(&self, task_id: TaskId) -> BoardStoreResult<Vec<HistoryEntry>>;

    /// Returns at most `limit` history entries across all tasks, newest
    /// first, joined with task titles and user names.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn recent_activity(&self, limit: usize) -> BoardStoreResult<Vec<RecentActivity>>;

    /// Counts tasks by status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn task_statistics(&self) -> BoardStoreResult<TaskStatistics>;

    /// Counts tasks assigned to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn user_task_count(&self, user_id: UserId) -> BoardStoreResult<usize>;

    /// Makes `blocker_id` a direct blocker of `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::SelfDependency`] when both identifiers are
    /// equal, [`BoardStoreError::TaskNotFound`] when either task is missing,
    /// [`BoardStoreError::DependencyCycle`] when `task_id` already blocks
    /// `blocker_id` transitively, or [`BoardStoreError::DuplicateDependency`]
    /// when the edge already exists.
    fn add_dependency(&self, task_id: TaskId, blocker_id: TaskId) -> BoardStoreResult<()>;

    /// Removes `blocker_id` from the direct blockers of `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::DependencyNotFound`] when the edge does not
    /// exist, including when `task_id` itself is missing.
    fn remove_dependency(&self, task_id: TaskId, blocker_id: TaskId) -> BoardStoreResult<()>;

    /// Returns the existing direct blockers of `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn blocking_tasks(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>>;

    /// Returns the tasks that `task_id` directly blocks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn blocked_tasks(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>>;

    /// Returns every existing task that blocks `task_id` through any chain of
    /// blockers.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn transitive_blockers(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>>;

    /// Returns `true` when any direct blocker of `task_id` is not done.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStoreError::Persistence`] when the store is unusable.
    fn is_task_blocked(&self, task_id: TaskId) -> BoardStoreResult<bool>;
}

/// Errors returned by board store implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardStoreError {
    /// The user was not found.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The user still has assigned tasks.
    #[error("user {user_id} still has {task_count} assigned task(s)")]
    UserHasTasks {
        /// User that could not be removed.
        user_id: UserId,
        /// Number of tasks assigned to the user.
        task_count: usize,
    },

    /// A task cannot block itself.
    #[error("task {0} cannot block itself")]
    SelfDependency(TaskId),

    /// The dependency would close a cycle.
    #[error("task {blocker_id} cannot block task {task_id}: it would create a dependency cycle")]
    DependencyCycle {
        /// Task that would be blocked.
        task_id: TaskId,
        /// Proposed blocker.
        blocker_id: TaskId,
    },

    /// The dependency already exists.
    #[error("task {task_id} is already blocked by task {blocker_id}")]
    DuplicateDependency {
        /// Blocked task.
        task_id: TaskId,
        /// Existing blocker.
        blocker_id: TaskId,
    },

    /// The dependency does not exist.
    #[error("task {task_id} is not blocked by task {blocker_id}")]
    DependencyNotFound {
        /// Task the edge was expected on.
        task_id: TaskId,
        /// Blocker that was expected.
        blocker_id: TaskId,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
