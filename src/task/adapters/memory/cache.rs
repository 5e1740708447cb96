//! Thread-safe in-memory listing cache with TTL expiry.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::identity::domain::UserId;
use crate::task::{
    domain::{StatusFilter, Task},
    ports::{CacheConfig, CacheError, CacheKey, CacheResult, ListingCache},
};

/// Thread-safe in-memory listing cache.
///
/// Expiry is evaluated lazily on read against the injected clock; expired
/// entries are dropped when observed rather than swept in the background.
pub struct InMemoryListingCache<C> {
    entries: Arc<RwLock<HashMap<CacheKey, CacheSlot>>>,
    config: CacheConfig,
    clock: Arc<C>,
}

#[derive(Debug, Clone)]
struct CacheSlot {
    tasks: Vec<Task>,
    stored_at: DateTime<Utc>,
}

fn lock_poisoned(err: impl std::fmt::Display) -> CacheError {
    CacheError::backend(std::io::Error::other(err.to_string()))
}

impl<C> InMemoryListingCache<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a cache with the default 600-second TTL.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(CacheConfig::default(), clock)
    }

    /// Creates a cache with an explicit configuration.
    #[must_use]
    pub fn with_config(config: CacheConfig, clock: Arc<C>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            config,
            clock,
        }
    }

    fn is_expired(&self, slot: &CacheSlot, now: DateTime<Utc>) -> bool {
        let Ok(ttl_secs) = i64::try_from(self.config.ttl_secs) else {
            return false;
        };
        now - slot.stored_at >= Duration::seconds(ttl_secs)
    }
}

#[async_trait]
impl<C> ListingCache for InMemoryListingCache<C>
where
    C: Clock + Send + Sync,
{
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<Vec<Task>>> {
        let now = self.clock.utc();
        let expired = {
            let entries = self.entries.read().map_err(lock_poisoned)?;
            match entries.get(key) {
                None => return Ok(None),
                Some(slot) if !self.is_expired(slot, now) => {
                    tracing::debug!(key = %key, "listing cache hit");
                    return Ok(Some(slot.tasks.clone()));
                }
                Some(_) => true,
            }
        };
        if expired {
            let mut entries = self.entries.write().map_err(lock_poisoned)?;
            // Re-check under the write lock; a concurrent put may have
            // refreshed the slot since the read.
            if let Some(slot) = entries.get(key)
                && self.is_expired(slot, now)
            {
                entries.remove(key);
            }
        }
        Ok(None)
    }

    async fn put(&self, key: CacheKey, tasks: Vec<Task>) -> CacheResult<()> {
        let mut entries = self.entries.write().map_err(lock_poisoned)?;
        entries.insert(
            key,
            CacheSlot {
                tasks,
                stored_at: self.clock.utc(),
            },
        );
        Ok(())
    }

    async fn invalidate_owner(&self, owner_id: UserId) -> CacheResult<()> {
        let mut entries = self.entries.write().map_err(lock_poisoned)?;
        for filter in StatusFilter::ALL_KEYS {
            entries.remove(&CacheKey::new(owner_id, filter));
        }
        Ok(())
    }
}
