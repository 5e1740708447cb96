//! Unit tests for notification delivery outcomes.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;

use crate::identity::{
    adapters::InMemoryUserDirectory,
    domain::{User, UserId, UserRole},
};
use crate::notification::{
    adapters::memory::RecordingMailer,
    domain::{EmailMessage, NotificationAction, NotificationJob},
    ports::{Mailer, MailerError, MailerResult},
    services::{DeliveryOutcome, NotificationDispatcher, NotificationError},
};
use crate::task::domain::{Task, TaskStatus, TaskTitle};
use async_trait::async_trait;
use mockable::DefaultClock;
use mockall::mock;
use rstest::{fixture, rstest};

mock! {
    Transport {}

    #[async_trait]
    impl Mailer for Transport {
        async fn send(&self, message: &EmailMessage) -> MailerResult<()>;
    }
}

#[fixture]
fn directory() -> Arc<InMemoryUserDirectory> {
    Arc::new(InMemoryUserDirectory::new())
}

fn owner_with_email(directory: &InMemoryUserDirectory) -> User {
    let owner = User::new(
        UserId::new(),
        "Priya",
        Some("priya@example.com".to_owned()),
        UserRole::User,
    );
    directory.insert(owner.clone()).expect("insert owner");
    owner
}

fn job_for(owner_id: UserId, title: &str, action: NotificationAction) -> NotificationJob {
    let task = Task::new(
        owner_id,
        TaskTitle::new(title).expect("valid title"),
        None,
        Some(TaskStatus::InProgress),
        &DefaultClock,
    );
    NotificationJob::new(task, action)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delivers_to_owner_with_subject_naming_action_and_title(
    directory: Arc<InMemoryUserDirectory>,
) {
    let owner = owner_with_email(&directory);
    let mailer = Arc::new(RecordingMailer::new());
    let dispatcher = NotificationDispatcher::new(directory, Arc::clone(&mailer));

    let outcome = dispatcher
        .deliver(&job_for(owner.id(), "Quarterly report", NotificationAction::Created))
        .await
        .expect("delivery succeeds");

    assert_eq!(outcome, DeliveryOutcome::Sent);
    let sent = mailer.sent().expect("sent snapshot");
    assert_eq!(sent.len(), 1);
    let message = sent.first().expect("one message");
    assert_eq!(message.recipient(), "priya@example.com");
    assert_eq!(message.subject(), "Task created: Quarterly report");
    assert!(message.body().contains("Priya"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_owner_is_skipped_without_sending(directory: Arc<InMemoryUserDirectory>) {
    let mailer = Arc::new(RecordingMailer::new());
    let dispatcher = NotificationDispatcher::new(directory, Arc::clone(&mailer));

    let outcome = dispatcher
        .deliver(&job_for(UserId::new(), "Orphaned", NotificationAction::Updated))
        .await
        .expect("skip is not an error");

    assert_eq!(outcome, DeliveryOutcome::SkippedMissingOwner);
    assert!(mailer.sent().expect("sent snapshot").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_without_email_is_skipped_without_sending(directory: Arc<InMemoryUserDirectory>) {
    let owner = User::new(UserId::new(), "Quiet", None, UserRole::User);
    directory.insert(owner.clone()).expect("insert owner");
    let mailer = Arc::new(RecordingMailer::new());
    let dispatcher = NotificationDispatcher::new(directory, Arc::clone(&mailer));

    let outcome = dispatcher
        .deliver(&job_for(owner.id(), "Unreachable", NotificationAction::Completed))
        .await
        .expect("skip is not an error");

    assert_eq!(outcome, DeliveryOutcome::SkippedNoEmail);
    assert!(mailer.sent().expect("sent snapshot").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transport_failure_propagates_for_queue_retry(directory: Arc<InMemoryUserDirectory>) {
    let owner = owner_with_email(&directory);
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(MailerError::transport(std::io::Error::other("smtp down"))));
    let dispatcher = NotificationDispatcher::new(directory, Arc::new(transport));

    let result = dispatcher
        .deliver(&job_for(owner.id(), "Flaky", NotificationAction::Updated))
        .await;

    assert!(matches!(result, Err(NotificationError::Delivery(_))));
}

#[rstest]
#[case(NotificationAction::Created, "created")]
#[case(NotificationAction::Updated, "updated")]
#[case(NotificationAction::Completed, "completed")]
fn action_wording_matches_wire_values(#[case] action: NotificationAction, #[case] word: &str) {
    assert_eq!(action.as_str(), word);
    let json = serde_json::to_string(&action).expect("serialize action");
    assert_eq!(json, format!("\"{word}\""));
}
