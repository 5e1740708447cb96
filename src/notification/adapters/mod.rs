//! Adapter implementations for notification ports.

pub mod memory;

mod worker;

pub use worker::TokioNotificationQueue;
