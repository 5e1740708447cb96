//! User identity for Taskdeck.
//!
//! Authentication itself (sessions, passwords, tokens) is an external
//! collaborator; this module only models the acting user shape the rest of
//! the crate needs: a stable identifier, a display name, an optional email
//! address for notifications, and a coarse role used by the authorization
//! policy. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;
