//! Port contracts for task persistence and list-query caching.
//!
//! Ports define infrastructure-agnostic interfaces used by the API facade.

pub mod cache;
pub mod repository;

pub use cache::{CacheConfig, CacheError, CacheKey, CacheResult, ListingCache};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
