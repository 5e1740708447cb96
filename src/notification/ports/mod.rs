//! Port contracts for notification dispatch.

pub mod mailer;
pub mod queue;

pub use mailer::{Mailer, MailerError, MailerResult};
pub use queue::{NotificationQueue, QueueError, QueueResult};
