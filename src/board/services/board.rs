//! Service layer combining field validation with board store operations.

use crate::board::{
    domain::{
        DEFAULT_RECENT_ACTIVITY_LIMIT, HistoryEntry, NewTask, NewUser, RecentActivity, Task,
        TaskId, TaskPatch, TaskStatistics, User, UserId, UserPatch,
    },
    ports::{BoardStore, BoardStoreError},
    validation::{ValidationErrors, rules},
};
use crate::config::BoardConfig;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardServiceError {
    /// Field validation failed before the store was called.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] BoardStoreError),
}

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Board orchestration service.
///
/// Validates field shapes against the configured limits, then delegates to
/// the store, which enforces referential and dependency invariants.
pub struct BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    config: BoardConfig,
}

impl<S, C> Clone for BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<S, C> BoardService<S, C>
where
    S: BoardStore,
    C: Clock + Send + Sync,
{
    /// Creates a new board service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns all users.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn list_users(&self) -> BoardServiceResult<Vec<User>> {
        Ok(self.store.list_users()?)
    }

    /// Finds a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn find_user(&self, id: UserId) -> BoardServiceResult<Option<User>> {
        Ok(self.store.find_user(id)?)
    }

    /// Validates and stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when the name or email is
    /// malformed.
    pub fn create_user(&self, user: NewUser) -> BoardServiceResult<User> {
        ValidationErrors::check([
            rules::validate_name(&user.name, &self.config.limits),
            rules::validate_email(&user.email),
        ])?;
        let created = self.store.create_user(user)?;
        info!(user_id = %created.id(), role = %created.role(), "user added to board");
        Ok(created)
    }

    /// Validates the set fields of `patch` and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when a patched field is
    /// malformed, or [`BoardServiceError::Store`] when the user is missing.
    pub fn update_user(&self, id: UserId, patch: UserPatch) -> BoardServiceResult<User> {
        ValidationErrors::check([
            patch
                .name()
                .map_or(Ok(()), |name| rules::validate_name(name, &self.config.limits)),
            patch.email().map_or(Ok(()), rules::validate_email),
        ])?;
        Ok(self.store.update_user(id, patch)?)
    }

    /// Removes a user without assigned tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the user is missing or still
    /// has tasks.
    pub fn delete_user(&self, id: UserId) -> BoardServiceResult<()> {
        self.store.delete_user(id)?;
        info!(user_id = %id, "user removed from board");
        Ok(())
    }

    /// Returns all tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn list_tasks(&self) -> BoardServiceResult<Vec<Task>> {
        Ok(self.store.list_tasks()?)
    }

    /// Finds a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn find_task(&self, id: TaskId) -> BoardServiceResult<Option<Task>> {
        Ok(self.store.find_task(id)?)
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when the title, description,
    /// or due date is malformed, or [`BoardServiceError::Store`] when the
    /// assignee does not exist.
    pub fn create_task(&self, task: NewTask) -> BoardServiceResult<Task> {
        let today = self.clock.local().date_naive();
        ValidationErrors::check([
            rules::validate_title(&task.title, &self.config.limits),
            rules::validate_description(task.description.as_deref(), &self.config.limits),
            rules::validate_due_date(task.due_date, today),
        ])?;
        let created = self.store.create_task(task)?;
        info!(task_id = %created.id(), "task created");
        Ok(created)
    }

    /// Validates the set fields of `patch` and applies it on behalf of
    /// `acting_user`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Validation`] when a patched field is
    /// malformed, or [`BoardServiceError::Store`] when the task or a new
    /// assignee is missing.
    pub fn update_task(
        &self,
        id: TaskId,
        patch: TaskPatch,
        acting_user: UserId,
    ) -> BoardServiceResult<Task> {
        let today = self.clock.local().date_naive();
        ValidationErrors::check([
            patch
                .title()
                .map_or(Ok(()), |title| rules::validate_title(title, &self.config.limits)),
            patch.description().map_or(Ok(()), |description| {
                rules::validate_description(description, &self.config.limits)
            }),
            patch
                .due_date()
                .map_or(Ok(()), |due_date| rules::validate_due_date(due_date, today)),
        ])?;
        Ok(self.store.update_task(id, patch, acting_user)?)
    }

    /// Removes a task and its history.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the task is missing.
    pub fn delete_task(&self, id: TaskId) -> BoardServiceResult<()> {
        self.store.delete_task(id)?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Returns the history of one task, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn task_history(&self, task_id: TaskId) -> BoardServiceResult<Vec<HistoryEntry>> {
        Ok(self.store.task_history(task_id)?)
    }

    /// Returns the recent-activity feed using the configured length, capped
    /// at [`DEFAULT_RECENT_ACTIVITY_LIMIT`] entries.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn recent_activity(&self) -> BoardServiceResult<Vec<RecentActivity>> {
        Ok(self
            .store
            .recent_activity(
                self.config
                    .recent_activity_limit
                    .min(DEFAULT_RECENT_ACTIVITY_LIMIT),
            )?)
    }

    /// Counts tasks by status.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn task_statistics(&self) -> BoardServiceResult<TaskStatistics> {
        Ok(self.store.task_statistics()?)
    }

    /// Counts tasks assigned to a user.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn user_task_count(&self, user_id: UserId) -> BoardServiceResult<usize> {
        Ok(self.store.user_task_count(user_id)?)
    }

    /// Makes `blocker_id` block `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] for self, missing, cyclic, or
    /// duplicate dependencies.
    pub fn add_dependency(&self, task_id: TaskId, blocker_id: TaskId) -> BoardServiceResult<()> {
        Ok(self.store.add_dependency(task_id, blocker_id)?)
    }

    /// Removes a dependency.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the dependency is absent.
    pub fn remove_dependency(
        &self,
        task_id: TaskId,
        blocker_id: TaskId,
    ) -> BoardServiceResult<()> {
        Ok(self.store.remove_dependency(task_id, blocker_id)?)
    }

    /// Returns the direct blockers of a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn blocking_tasks(&self, task_id: TaskId) -> BoardServiceResult<Vec<Task>> {
        Ok(self.store.blocking_tasks(task_id)?)
    }

    /// Returns the tasks a task directly blocks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn blocked_tasks(&self, task_id: TaskId) -> BoardServiceResult<Vec<Task>> {
        Ok(self.store.blocked_tasks(task_id)?)
    }

    /// Returns every task blocking a task through any chain.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn transitive_blockers(&self, task_id: TaskId) -> BoardServiceResult<Vec<Task>> {
        Ok(self.store.transitive_blockers(task_id)?)
    }

    /// Returns `true` when a direct blocker is not done.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::Store`] when the store fails.
    pub fn is_task_blocked(&self, task_id: TaskId) -> BoardServiceResult<bool> {
        Ok(self.store.is_task_blocked(task_id)?)
    }
}
