//! Notification delivery service executed by the background worker.

use crate::identity::ports::{UserDirectory, UserDirectoryError};
use crate::notification::{
    domain::{EmailMessage, NotificationJob},
    ports::{Mailer, MailerError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by notification delivery.
///
/// Only transient failures are errors; unresolved owners and missing email
/// addresses are terminal outcomes that must not trigger redelivery.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Owner lookup failed at the directory backend.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),

    /// The mail transport failed; the queue may redeliver.
    #[error(transparent)]
    Delivery(#[from] MailerError),
}

/// Terminal result of processing one notification job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The notification email was handed to the transport.
    Sent,
    /// The task references a user that no longer exists; nothing was sent.
    SkippedMissingOwner,
    /// The owner has no email address on record; nothing was sent.
    SkippedNoEmail,
}

/// Resolves the task owner and delivers one notification email per job.
///
/// Retry on transport failure is the queue collaborator's policy; this
/// service only propagates the failure.
pub struct NotificationDispatcher<D, M>
where
    D: UserDirectory,
    M: Mailer,
{
    directory: Arc<D>,
    mailer: Arc<M>,
}

impl<D, M> NotificationDispatcher<D, M>
where
    D: UserDirectory,
    M: Mailer,
{
    /// Creates a dispatcher over the given directory and transport.
    #[must_use]
    pub const fn new(directory: Arc<D>, mailer: Arc<M>) -> Self {
        Self { directory, mailer }
    }

    /// Processes one notification job.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Directory`] when the owner lookup backend
    /// fails, or [`NotificationError::Delivery`] when the transport rejects
    /// the message. A missing owner or a missing email address is a skipped
    /// outcome, not an error.
    pub async fn deliver(
        &self,
        job: &NotificationJob,
    ) -> Result<DeliveryOutcome, NotificationError> {
        let task = job.task();
        let Some(owner) = self.directory.find_by_id(task.owner_id()).await? else {
            // Data-integrity problem, not a transient fault: do not retry.
            tracing::error!(
                task_id = %task.id(),
                owner_id = %task.owner_id(),
                "no owner found for task notification"
            );
            return Ok(DeliveryOutcome::SkippedMissingOwner);
        };

        let Some(email) = owner.email() else {
            tracing::warn!(
                task_id = %task.id(),
                owner_id = %owner.id(),
                "task owner has no email address"
            );
            return Ok(DeliveryOutcome::SkippedNoEmail);
        };

        let message = render_message(job, email, owner.name());
        tracing::info!(recipient = email, action = %job.action(), "sending task notification");
        if let Err(err) = self.mailer.send(&message).await {
            tracing::error!(
                recipient = email,
                error = %err,
                "task notification delivery failed"
            );
            return Err(err.into());
        }
        Ok(DeliveryOutcome::Sent)
    }
}

/// Renders the notification email for a job.
fn render_message(job: &NotificationJob, recipient: &str, owner_name: &str) -> EmailMessage {
    let task = job.task();
    let subject = format!("Task {}: {}", job.action(), task.title());
    let body = format!(
        "Hello {owner_name},\n\nYour task \"{}\" has been {}.\nCurrent status: {}.\n",
        task.title(),
        job.action(),
        task.status()
    );
    EmailMessage::new(recipient, subject, body)
}
