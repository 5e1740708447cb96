//! Application services for notification delivery.

mod dispatcher;

pub use dispatcher::{DeliveryOutcome, NotificationDispatcher, NotificationError};
