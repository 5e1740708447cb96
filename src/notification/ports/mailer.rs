//! Mail transport port.

use crate::notification::domain::EmailMessage;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for mail transport operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// Email delivery contract.
///
/// Implementations wrap whatever delivery service the host application uses;
/// they must not retry internally, as redelivery belongs to the job queue.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends a single message.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] when delivery fails.
    async fn send(&self, message: &EmailMessage) -> MailerResult<()>;
}

/// Errors returned by mail transport implementations.
#[derive(Debug, Clone, Error)]
pub enum MailerError {
    /// The transport failed to deliver the message.
    #[error("mail transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl MailerError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
