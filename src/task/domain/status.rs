//! Task status enum and the listing filter derived from it.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task workflow status.
///
/// Wire and storage values are the exact hyphenated lowercase strings
/// `to-do`, `in-progress`, and `done`; no aliases are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "to-do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "in-progress")]
    InProgress,
    /// Work is finished.
    #[serde(rename = "done")]
    Done,
}

impl TaskStatus {
    /// All statuses in workflow order.
    pub const ALL: [Self; 3] = [Self::ToDo, Self::InProgress, Self::Done];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "to-do",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "to-do" => Ok(Self::ToDo),
            "in-progress" => Ok(Self::InProgress),
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

/// Status filter applied to owner listings.
///
/// `All` and the three concrete statuses are also the four cache key
/// segments the listing cache invalidates per owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// No filtering; every task owned by the user.
    All,
    /// Only tasks in the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// All filter values, matching the cache key set per owner.
    pub const ALL_KEYS: [Self; 4] = [
        Self::All,
        Self::Only(TaskStatus::ToDo),
        Self::Only(TaskStatus::InProgress),
        Self::Only(TaskStatus::Done),
    ];

    /// Returns the cache key segment for this filter.
    #[must_use]
    pub const fn as_key_segment(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Returns `true` when the given status passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

impl From<Option<TaskStatus>> for StatusFilter {
    fn from(value: Option<TaskStatus>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key_segment())
    }
}
