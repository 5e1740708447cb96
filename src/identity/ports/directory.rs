//! Directory port for resolving user accounts by identifier.

use crate::identity::domain::{User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user directory operations.
pub type UserDirectoryResult<T> = Result<T, UserDirectoryError>;

/// Lookup contract over the user store.
///
/// The notification dispatcher resolves task owners through this port; the
/// backing store is whatever the host application uses for accounts.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a user by identifier.
    ///
    /// Returns `None` when no such user exists.
    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>>;
}

/// Errors returned by user directory implementations.
#[derive(Debug, Clone, Error)]
pub enum UserDirectoryError {
    /// Backend lookup failure.
    #[error("user directory error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserDirectoryError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
