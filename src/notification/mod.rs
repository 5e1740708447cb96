//! Asynchronous task lifecycle notifications.
//!
//! Lifecycle events on task records (`created`, `updated`, `completed`)
//! produce email notifications to the task owner. Dispatch is fire-and-forget
//! from the request path: the facade enqueues a job descriptor and returns;
//! a background worker resolves the owner, renders the message, and hands it
//! to the mail transport. Retry on transport failure belongs to the queue
//! collaborator, not to this module. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The dispatcher service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
