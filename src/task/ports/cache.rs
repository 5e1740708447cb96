//! Cache port for memoized owner listings.

use crate::identity::domain::UserId;
use crate::task::domain::{StatusFilter, Task};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for listing cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Default entry lifetime in seconds.
const DEFAULT_TTL_SECS: u64 = 600;

/// Listing cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Entry lifetime in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

/// Cache key for one owner listing: `(owner, filter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    owner_id: UserId,
    filter: StatusFilter,
}

impl CacheKey {
    /// Creates a cache key.
    #[must_use]
    pub const fn new(owner_id: UserId, filter: StatusFilter) -> Self {
        Self { owner_id, filter }
    }

    /// Returns the owner segment of the key.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the filter segment of the key.
    #[must_use]
    pub const fn filter(&self) -> StatusFilter {
        self.filter
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tasks_user_{}_status_{}",
            self.owner_id,
            self.filter.as_key_segment()
        )
    }
}

/// Memoization contract for owner list queries.
///
/// Entries expire after the configured TTL; writes through the API facade
/// invalidate all four filter keys for the affected owner. A race between an
/// invalidation and a concurrent population can leave a stale entry; that is
/// acceptable and bounded by the TTL.
#[async_trait]
pub trait ListingCache: Send + Sync {
    /// Returns the memoized listing, or `None` on miss or expiry.
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<Vec<Task>>>;

    /// Stores a listing under the key with the configured TTL.
    async fn put(&self, key: CacheKey, tasks: Vec<Task>) -> CacheResult<()>;

    /// Unconditionally drops all four filter keys for the owner.
    async fn invalidate_owner(&self, owner_id: UserId) -> CacheResult<()>;
}

/// Errors returned by listing cache implementations.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// Backing store failure.
    #[error("cache backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl CacheError {
    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
