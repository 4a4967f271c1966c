//! Thread-safe in-memory board store.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use mockable::{Clock, DefaultClock};
use tracing::{debug, info, warn};

use super::fixture;
use crate::board::{
    domain::{
        HistoryAction, HistoryEntry, IdSequence, NewTask, NewUser, RecentActivity, Task, TaskId,
        TaskPatch, TaskStatistics, User, UserId, UserPatch, graph, newest_first,
    },
    ports::{BoardStore, BoardStoreError, BoardStoreResult},
};

/// In-memory board store.
///
/// Users, tasks, history, and identifier sequences live in one state value
/// behind a single lock, so every operation observes and produces a
/// consistent board. Clones share the same state.
pub struct InMemoryBoardStore<C = DefaultClock> {
    state: Arc<RwLock<BoardState>>,
    clock: Arc<C>,
}

#[derive(Debug, Default)]
pub(super) struct BoardState {
    pub(super) users: BTreeMap<UserId, User>,
    pub(super) tasks: BTreeMap<TaskId, Task>,
    pub(super) history: Vec<HistoryEntry>,
    user_ids: IdSequence,
    task_ids: IdSequence,
    history_sequence: IdSequence,
}

impl BoardState {
    pub(super) fn insert_user(&mut self, user: User) {
        self.user_ids.observe(user.id().value());
        self.users.insert(user.id(), user);
    }

    pub(super) fn insert_task(&mut self, task: Task) {
        self.task_ids.observe(task.id().value());
        self.tasks.insert(task.id(), task);
    }

    pub(super) fn append_history(
        &mut self,
        task_id: TaskId,
        action: HistoryAction,
        user_id: UserId,
        timestamp: DateTime<Utc>,
    ) {
        let sequence = self.history_sequence.allocate();
        self.history.push(HistoryEntry::new(
            sequence, task_id, action, user_id, timestamp,
        ));
    }

    fn blockers_of(&self, id: TaskId) -> Option<&BTreeSet<TaskId>> {
        self.tasks.get(&id).map(Task::blocked_by)
    }

    /// Direct blockers of `id` that still exist.
    fn direct_blockers(&self, id: TaskId) -> Vec<&Task> {
        self.blockers_of(id)
            .map(|blockers| {
                blockers
                    .iter()
                    .filter_map(|blocker| self.tasks.get(blocker))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn assigned_task_count(&self, user_id: UserId) -> usize {
        self.tasks
            .values()
            .filter(|task| task.assignee_id() == user_id)
            .count()
    }

    fn ensure_task_exists(&self, id: TaskId) -> BoardStoreResult<()> {
        if self.tasks.contains_key(&id) {
            Ok(())
        } else {
            Err(BoardStoreError::TaskNotFound(id))
        }
    }

    fn ensure_user_exists(&self, id: UserId) -> BoardStoreResult<()> {
        if self.users.contains_key(&id) {
            Ok(())
        } else {
            Err(BoardStoreError::UserNotFound(id))
        }
    }
}

impl InMemoryBoardStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryBoardStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryBoardStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store using `clock` for timestamps.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(BoardState::default())),
            clock,
        }
    }

    /// Creates a store pre-populated with the demo team and tasks.
    ///
    /// Creation and history timestamps are back-dated from the current
    /// clock time.
    #[must_use]
    pub fn with_demo_data(clock: Arc<C>) -> Self {
        let mut state = BoardState::default();
        fixture::seed(&mut state, clock.utc());
        info!(
            users = state.users.len(),
            tasks = state.tasks.len(),
            "seeded demo board"
        );
        Self {
            state: Arc::new(RwLock::new(state)),
            clock,
        }
    }

    fn read(&self) -> BoardStoreResult<RwLockReadGuard<'_, BoardState>> {
        self.state.read().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> BoardStoreResult<RwLockWriteGuard<'_, BoardState>> {
        self.state.write().map_err(|err| {
            BoardStoreError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl<C> Clone for InMemoryBoardStore<C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> fmt::Debug for InMemoryBoardStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryBoardStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<C> BoardStore for InMemoryBoardStore<C>
where
    C: Clock + Send + Sync,
{
    fn list_users(&self) -> BoardStoreResult<Vec<User>> {
        let state = self.read()?;
        Ok(state.users.values().cloned().collect())
    }

    fn find_user(&self, id: UserId) -> BoardStoreResult<Option<User>> {
        let state = self.read()?;
        Ok(state.users.get(&id).cloned())
    }

    fn create_user(&self, user: NewUser) -> BoardStoreResult<User> {
        let mut state = self.write()?;
        let id = UserId::new(state.user_ids.allocate());
        let created = User::from_new(id, user);
        state.users.insert(id, created.clone());
        debug!(user_id = %id, "user created");
        Ok(created)
    }

    fn update_user(&self, id: UserId, patch: UserPatch) -> BoardStoreResult<User> {
        let mut state = self.write()?;
        let user = state
            .users
            .get_mut(&id)
            .ok_or(BoardStoreError::UserNotFound(id))?;
        user.apply(patch);
        debug!(user_id = %id, "user updated");
        Ok(user.clone())
    }

    fn delete_user(&self, id: UserId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        let task_count = state.assigned_task_count(id);
        if task_count > 0 {
            warn!(user_id = %id, task_count, "refusing to delete user with assigned tasks");
            return Err(BoardStoreError::UserHasTasks {
                user_id: id,
                task_count,
            });
        }
        state
            .users
            .remove(&id)
            .ok_or(BoardStoreError::UserNotFound(id))?;
        debug!(user_id = %id, "user deleted");
        Ok(())
    }

    fn list_tasks(&self) -> BoardStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    fn find_task(&self, id: TaskId) -> BoardStoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    fn create_task(&self, task: NewTask) -> BoardStoreResult<Task> {
        let mut state = self.write()?;
        state.ensure_user_exists(task.assignee_id)?;

        let id = TaskId::new(state.task_ids.allocate());
        let created = Task::new(id, task, &*self.clock);
        state.append_history(
            id,
            HistoryAction::Created,
            created.assignee_id(),
            created.created_at(),
        );
        state.tasks.insert(id, created.clone());
        debug!(task_id = %id, assignee_id = %created.assignee_id(), "task created");
        Ok(created)
    }

    fn update_task(
        &self,
        id: TaskId,
        patch: TaskPatch,
        acting_user: UserId,
    ) -> BoardStoreResult<Task> {
        let mut state = self.write()?;
        state.ensure_task_exists(id)?;
        if let Some(assignee_id) = patch.assignee_id() {
            state.ensure_user_exists(assignee_id)?;
        }

        let timestamp = self.clock.utc();
        let task = state
            .tasks
            .get_mut(&id)
            .ok_or(BoardStoreError::TaskNotFound(id))?;
        let action = task
            .apply(patch)
            .map_or(HistoryAction::Updated, HistoryAction::StatusChanged);
        let updated = task.clone();
        state.append_history(id, action, acting_user, timestamp);
        debug!(task_id = %id, acting_user = %acting_user, %action, "task updated");
        Ok(updated)
    }

    fn delete_task(&self, id: TaskId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        state
            .tasks
            .remove(&id)
            .ok_or(BoardStoreError::TaskNotFound(id))?;
        state.history.retain(|entry| entry.task_id() != id);
        debug!(task_id = %id, "task deleted");
        Ok(())
    }

    fn task_history(&self, task_id: TaskId) -> BoardStoreResult<Vec<HistoryEntry>> {
        let state = self.read()?;
        let mut entries: Vec<HistoryEntry> = state
            .history
            .iter()
            .filter(|entry| entry.task_id() == task_id)
            .cloned()
            .collect();
        entries.sort_by(newest_first);
        Ok(entries)
    }

    fn recent_activity(&self, limit: usize) -> BoardStoreResult<Vec<RecentActivity>> {
        let state = self.read()?;
        let mut entries: Vec<&HistoryEntry> = state.history.iter().collect();
        entries.sort_by(|left, right| newest_first(left, right));
        Ok(entries
            .into_iter()
            .take(limit)
            .map(|entry| {
                RecentActivity::join(
                    entry,
                    state.tasks.get(&entry.task_id()).map(Task::title),
                    state.users.get(&entry.user_id()).map(User::name),
                )
            })
            .collect())
    }

    fn task_statistics(&self) -> BoardStoreResult<TaskStatistics> {
        let state = self.read()?;
        Ok(TaskStatistics::from_tasks(state.tasks.values()))
    }

    fn user_task_count(&self, user_id: UserId) -> BoardStoreResult<usize> {
        let state = self.read()?;
        Ok(state.assigned_task_count(user_id))
    }

    fn add_dependency(&self, task_id: TaskId, blocker_id: TaskId) -> BoardStoreResult<()> {
        if task_id == blocker_id {
            warn!(task_id = %task_id, "rejected self dependency");
            return Err(BoardStoreError::SelfDependency(task_id));
        }

        let mut state = self.write()?;
        state.ensure_task_exists(task_id)?;
        state.ensure_task_exists(blocker_id)?;

        let snapshot: &BoardState = &state;
        if graph::would_create_cycle(task_id, blocker_id, |id| snapshot.blockers_of(id)) {
            warn!(task_id = %task_id, blocker_id = %blocker_id, "rejected cyclic dependency");
            return Err(BoardStoreError::DependencyCycle {
                task_id,
                blocker_id,
            });
        }

        let task = state
            .tasks
            .get_mut(&task_id)
            .ok_or(BoardStoreError::TaskNotFound(task_id))?;
        if !task.insert_blocker(blocker_id) {
            return Err(BoardStoreError::DuplicateDependency {
                task_id,
                blocker_id,
            });
        }
        debug!(task_id = %task_id, blocker_id = %blocker_id, "dependency added");
        Ok(())
    }

    fn remove_dependency(&self, task_id: TaskId, blocker_id: TaskId) -> BoardStoreResult<()> {
        let mut state = self.write()?;
        let removed = state
            .tasks
            .get_mut(&task_id)
            .is_some_and(|task| task.remove_blocker(blocker_id));
        if !removed {
            return Err(BoardStoreError::DependencyNotFound {
                task_id,
                blocker_id,
            });
        }
        debug!(task_id = %task_id, blocker_id = %blocker_id, "dependency removed");
        Ok(())
    }

    fn blocking_tasks(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .direct_blockers(task_id)
            .into_iter()
            .cloned()
            .collect())
    }

    fn blocked_tasks(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .values()
            .filter(|task| task.is_blocked_by(task_id))
            .cloned()
            .collect())
    }

    fn transitive_blockers(&self, task_id: TaskId) -> BoardStoreResult<Vec<Task>> {
        let state = self.read()?;
        let snapshot: &BoardState = &state;
        let ids = graph::transitive_blockers(task_id, |id| snapshot.blockers_of(id));
        Ok(ids
            .iter()
            .filter_map(|id| snapshot.tasks.get(id))
            .cloned()
            .collect())
    }

    fn is_task_blocked(&self, task_id: TaskId) -> BoardStoreResult<bool> {
        let state = self.read()?;
        Ok(graph::any_unfinished(state.direct_blockers(task_id)))
    }
}
