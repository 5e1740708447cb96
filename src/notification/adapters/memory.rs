//! In-memory notification adapters for tests and embedded use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::notification::{
    domain::{EmailMessage, NotificationAction, NotificationJob},
    ports::{Mailer, MailerError, MailerResult, NotificationQueue, QueueError, QueueResult},
};

/// Queue adapter that records enqueued jobs without running them.
///
/// Stands in for the external job queue in facade tests, mirroring a faked
/// queue: assertions inspect what was pushed rather than what was delivered.
#[derive(Debug, Clone, Default)]
pub struct RecordingQueue {
    jobs: Arc<RwLock<Vec<NotificationJob>>>,
}

impl RecordingQueue {
    /// Creates an empty recording queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every job enqueued so far.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Backend`] when the record lock is poisoned.
    pub fn pushed(&self) -> QueueResult<Vec<NotificationJob>> {
        let jobs = self
            .jobs
            .read()
            .map_err(|err| QueueError::backend(std::io::Error::other(err.to_string())))?;
        Ok(jobs.clone())
    }

    /// Returns how many enqueued jobs carry the given action.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Backend`] when the record lock is poisoned.
    pub fn pushed_with_action(&self, action: NotificationAction) -> QueueResult<usize> {
        Ok(self
            .pushed()?
            .iter()
            .filter(|job| job.action() == action)
            .count())
    }
}

#[async_trait]
impl NotificationQueue for RecordingQueue {
    async fn enqueue(&self, job: NotificationJob) -> QueueResult<()> {
        let mut jobs = self
            .jobs
            .write()
            .map_err(|err| QueueError::backend(std::io::Error::other(err.to_string())))?;
        jobs.push(job);
        Ok(())
    }
}

/// Mail transport that records sent messages instead of delivering them.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
}

impl RecordingMailer {
    /// Creates an empty recording mailer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every message sent so far.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] when the record lock is poisoned.
    pub fn sent(&self) -> MailerResult<Vec<EmailMessage>> {
        let sent = self
            .sent
            .read()
            .map_err(|err| MailerError::transport(std::io::Error::other(err.to_string())))?;
        Ok(sent.clone())
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> MailerResult<()> {
        let mut sent = self
            .sent
            .write()
            .map_err(|err| MailerError::transport(std::io::Error::other(err.to_string())))?;
        sent.push(message.clone());
        Ok(())
    }
}
