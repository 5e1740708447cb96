//! Task lifecycle management for Taskdeck.
//!
//! This module implements the task record itself (owner, validated title,
//! optional description, three-state status), its persistence contract, the
//! TTL-bounded listing cache, and the owner-or-admin authorization policy.
//! The store is a pure persistence boundary: cache invalidation and
//! notification dispatch are orchestrated by the API facade, never here.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Authorization policy in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
