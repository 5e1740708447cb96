//! Taskdeck: multi-user task tracking core.
//!
//! This crate provides the core functionality for a small task-tracking
//! application: task persistence, owner-or-admin authorization, TTL-bounded
//! memoization of list queries, and asynchronous email notification of task
//! lifecycle events.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, queues)
//!
//! # Modules
//!
//! - [`identity`]: Users, roles, and owner resolution
//! - [`task`]: Task records, persistence, caching, and authorization
//! - [`notification`]: Asynchronous lifecycle notification dispatch
//! - [`api`]: Request validation and the CRUD facade

pub mod api;
pub mod identity;
pub mod notification;
pub mod task;
