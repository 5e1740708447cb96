//! Adapter implementations for task persistence and caching ports.

pub mod memory;
