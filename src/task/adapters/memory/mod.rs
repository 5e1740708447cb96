//! In-memory adapters for the task ports.

mod cache;
mod repository;

pub use cache::InMemoryListingCache;
pub use repository::InMemoryTaskRepository;
