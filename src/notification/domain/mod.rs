//! Domain model for lifecycle notifications.

mod action;
mod email;
mod job;

pub use action::NotificationAction;
pub use email::EmailMessage;
pub use job::NotificationJob;
