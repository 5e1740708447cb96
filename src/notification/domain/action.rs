//! Lifecycle action carried by a notification job.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle event being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationAction {
    /// A task was created.
    Created,
    /// A task was updated.
    Updated,
    /// A task transitioned into the done status.
    Completed,
}

impl NotificationAction {
    /// Returns the wording used in notification subjects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for NotificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
