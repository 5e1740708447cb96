//! Tokio-backed notification queue with an in-process worker loop.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::identity::ports::UserDirectory;
use crate::notification::{
    domain::NotificationJob,
    ports::{Mailer, NotificationQueue, QueueError, QueueResult},
    services::NotificationDispatcher,
};

/// Notification queue backed by a Tokio channel and a spawned worker.
///
/// Enqueueing pushes onto an unbounded channel and returns immediately; the
/// worker drains jobs and hands each to the dispatcher. Failed deliveries
/// are logged and dropped here; redelivery is the hosting queue service's
/// policy, and this in-process adapter does not implement one.
#[derive(Debug, Clone)]
pub struct TokioNotificationQueue {
    sender: mpsc::UnboundedSender<NotificationJob>,
}

impl TokioNotificationQueue {
    /// Spawns the worker loop and returns the queue handle plus the worker's
    /// join handle.
    ///
    /// The worker exits once every queue handle is dropped and the channel
    /// drains.
    #[must_use]
    pub fn spawn<D, M>(
        dispatcher: Arc<NotificationDispatcher<D, M>>,
    ) -> (Self, JoinHandle<()>)
    where
        D: UserDirectory + 'static,
        M: Mailer + 'static,
    {
        let (sender, mut receiver) = mpsc::unbounded_channel::<NotificationJob>();
        let handle = tokio::spawn(async move {
            while let Some(job) = receiver.recv().await {
                if let Err(err) = dispatcher.deliver(&job).await {
                    tracing::error!(
                        task_id = %job.task().id(),
                        action = %job.action(),
                        error = %err,
                        "notification job failed"
                    );
                }
            }
        });
        (Self { sender }, handle)
    }
}

#[async_trait]
impl NotificationQueue for TokioNotificationQueue {
    async fn enqueue(&self, job: NotificationJob) -> QueueResult<()> {
        self.sender.send(job).map_err(|_| QueueError::Closed)
    }
}
