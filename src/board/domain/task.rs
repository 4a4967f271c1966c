//! Task aggregate and related status and priority types.

use super::{ParsePriorityError, ParseTaskStatusError, TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is finished. Only this status releases dependent tasks.
    Done,
}

impl TaskStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns `true` for [`TaskStatus::Done`].
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match normalized.as_str() {
            "to do" | "todo" => Ok(Self::ToDo),
            "in progress" | "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values for a task that has not been stored yet.
///
/// New tasks always start in [`TaskStatus::ToDo`] with no blockers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    /// Short summary.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Urgency.
    pub priority: Priority,
    /// User the task is assigned to.
    pub assignee_id: UserId,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    /// Creates a task draft with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority, assignee_id: UserId) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority,
            assignee_id,
            due_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial update for a stored task.
///
/// Optional fields use a nested `Option`: `Some(None)` clears the value.
/// Blockers are not editable here; use the dependency operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<Option<String>>,
    status: Option<TaskStatus>,
    priority: Option<Priority>,
    assignee_id: Option<UserId>,
    due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    /// Removes the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    /// Sets the new status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the new priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Reassigns the task.
    #[must_use]
    pub const fn with_assignee(mut self, assignee_id: UserId) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    /// Sets the new due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(Some(due_date));
        self
    }

    /// Removes the due date.
    #[must_use]
    pub const fn clear_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Returns the patched title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the patched description, if any. `Some(None)` means cleared.
    #[must_use]
    pub fn description(&self) -> Option<Option<&str>> {
        self.description.as_ref().map(Option::as_deref)
    }

    /// Returns the patched status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the patched priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the patched assignee, if any.
    #[must_use]
    pub const fn assignee_id(&self) -> Option<UserId> {
        self.assignee_id
    }

    /// Returns the patched due date, if any. `Some(None)` means cleared.
    #[must_use]
    pub const fn due_date(&self) -> Option<Option<NaiveDate>> {
        self.due_date
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: Priority,
    assignee_id: UserId,
    created_at: DateTime<Utc>,
    due_date: Option<NaiveDate>,
    blocked_by: BTreeSet<TaskId>,
}

/// Parameter object for reconstructing a task with existing history, such as
/// fixture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Short summary.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Current status.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: Priority,
    /// Assigned user.
    pub assignee_id: UserId,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// Direct blockers.
    pub blocked_by: BTreeSet<TaskId>,
}

impl Task {
    /// Creates a task in [`TaskStatus::ToDo`] stamped with the current time.
    #[must_use]
    pub fn new(id: TaskId, draft: NewTask, clock: &impl Clock) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: TaskStatus::ToDo,
            priority: draft.priority,
            assignee_id: draft.assignee_id,
            created_at: clock.utc(),
            due_date: draft.due_date,
            blocked_by: BTreeSet::new(),
        }
    }

    /// Reconstructs a task from persisted data.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            assignee_id: data.assignee_id,
            created_at: data.created_at,
            due_date: data.due_date,
            blocked_by: data.blocked_by,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assigned user.
    #[must_use]
    pub const fn assignee_id(&self) -> UserId {
        self.assignee_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the direct blockers of this task.
    #[must_use]
    pub const fn blocked_by(&self) -> &BTreeSet<TaskId> {
        &self.blocked_by
    }

    /// Returns `true` when `blocker` is a direct blocker of this task.
    #[must_use]
    pub fn is_blocked_by(&self, blocker: TaskId) -> bool {
        self.blocked_by.contains(&blocker)
    }

    /// Merges the set fields of `patch` into this task.
    ///
    /// Returns the new status when the patch changed it.
    pub fn apply(&mut self, patch: TaskPatch) -> Option<TaskStatus> {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = assignee_id;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date;
        }
        let previous = self.status;
        let next = patch.status?;
        self.status = next;
        (next != previous).then_some(next)
    }

    /// Records `blocker` as a direct blocker.
    ///
    /// Returns `false` when the edge was already present. Cycle checks are
    /// the caller's responsibility.
    pub(crate) fn insert_blocker(&mut self, blocker: TaskId) -> bool {
        self.blocked_by.insert(blocker)
    }

    /// Removes `blocker` from the direct blockers.
    ///
    /// Returns `false` when the edge was absent.
    pub(crate) fn remove_blocker(&mut self, blocker: TaskId) -> bool {
        self.blocked_by.remove(&blocker)
    }
}
