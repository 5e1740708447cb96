//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the persisted column width.
    #[error("task title must not exceed {limit} characters, got {actual}")]
    TitleTooLong {
        /// Maximum permitted character count.
        limit: usize,
        /// Actual character count supplied.
        actual: usize,
    },
}

/// Error returned while parsing task statuses from wire or persistence values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
