//! Notification job descriptor enqueued by the API facade.

use super::NotificationAction;
use crate::task::domain::Task;
use serde::{Deserialize, Serialize};

/// Unit of asynchronous notification work.
///
/// Carries a snapshot of the task at enqueue time, so later mutations or a
/// delete do not change what the notification reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationJob {
    task: Task,
    action: NotificationAction,
}

impl NotificationJob {
    /// Creates a job for the given task snapshot and action.
    #[must_use]
    pub const fn new(task: Task, action: NotificationAction) -> Self {
        Self { task, action }
    }

    /// Returns the task snapshot.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the lifecycle action.
    #[must_use]
    pub const fn action(&self) -> NotificationAction {
        self.action
    }
}
