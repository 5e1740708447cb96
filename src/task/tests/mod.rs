//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain construction and parsing, the
//! authorization policy, the in-memory repository, and the TTL cache.
