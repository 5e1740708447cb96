//! API error taxonomy and HTTP status mapping.

use crate::api::validation::{DUPLICATE_TITLE_MESSAGE, ValidationErrors};
use crate::notification::ports::QueueError;
use crate::task::ports::{CacheError, TaskRepositoryError};
use std::sync::Arc;
use thiserror::Error;

/// Result type for facade operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Request-terminating failures surfaced by the facade.
///
/// Notification delivery failures never appear here: they occur in the
/// background job, after the response has been produced.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed, missing, or duplicate input; maps to HTTP 422.
    #[error("validation errors")]
    Validation(ValidationErrors),

    /// Authenticated but not authorized; maps to HTTP 403.
    #[error("this action is unauthorized")]
    Forbidden,

    /// No task with the requested identifier; maps to HTTP 404.
    #[error("task not found")]
    NotFound,

    /// Infrastructure failure; maps to HTTP 500 without masking the cause.
    #[error("internal error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 422,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::Internal(_) => 500,
        }
    }

    /// Wraps an infrastructure error.
    #[must_use]
    pub fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Arc::new(err))
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTitle(_) => {
                Self::Validation(ValidationErrors::single("title", DUPLICATE_TITLE_MESSAGE))
            }
            TaskRepositoryError::NotFound(_) => Self::NotFound,
            other => Self::internal(other),
        }
    }
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        Self::internal(err)
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        Self::internal(err)
    }
}
