//! Task aggregate root.

use super::{TaskId, TaskStatus, TaskTitle};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// `id` and `owner_id` are immutable after creation; `updated_at` tracks the
/// latest mutation through the injected clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: TaskTitle,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted workflow status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated field changes applied to an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement title.
    pub title: TaskTitle,
    /// What happens to the stored description.
    pub description: DescriptionChange,
    /// Replacement workflow status.
    pub status: TaskStatus,
}

/// Description portion of a change set.
///
/// A payload that omits the description leaves the stored value alone;
/// only a present value replaces or clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DescriptionChange {
    /// Leave the stored description unchanged.
    #[default]
    Keep,
    /// Replace the stored description; `None` clears it.
    Set(Option<String>),
}

impl DescriptionChange {
    /// Returns the description resulting from applying this change to the
    /// current value.
    #[must_use]
    pub fn resolve(self, current: Option<String>) -> Option<String> {
        match self {
            Self::Keep => current,
            Self::Set(next) => next,
        }
    }
}

impl Task {
    /// Creates a new task owned by the given user.
    ///
    /// `status` defaults to [`TaskStatus::ToDo`] when omitted.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        title: TaskTitle,
        description: Option<String>,
        status: Option<TaskStatus>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            owner_id,
            title,
            description,
            status: status.unwrap_or(TaskStatus::ToDo),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies validated field changes and refreshes `updated_at`.
    pub fn apply(&mut self, changes: TaskChanges, clock: &impl Clock) {
        self.title = changes.title;
        self.description = changes.description.resolve(self.description.take());
        self.status = changes.status;
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
