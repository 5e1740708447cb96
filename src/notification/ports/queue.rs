//! Background work queue port for notification jobs.

use crate::notification::domain::NotificationJob;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for queue operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// Fire-and-forget enqueue contract.
///
/// Enqueueing must not block on delivery; once a job is accepted it runs to
/// completion or fails under the queue's own retry policy. No cancellation
/// semantics are defined.
#[async_trait]
pub trait NotificationQueue: Send + Sync {
    /// Accepts a job for background processing.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Closed`] when the queue no longer accepts work,
    /// or [`QueueError::Backend`] on infrastructure failure.
    async fn enqueue(&self, job: NotificationJob) -> QueueResult<()>;
}

/// Errors returned by queue implementations.
#[derive(Debug, Clone, Error)]
pub enum QueueError {
    /// The queue has shut down and accepts no further work.
    #[error("notification queue is closed")]
    Closed,

    /// Infrastructure failure while accepting the job.
    #[error("queue backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl QueueError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
