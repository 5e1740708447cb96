//! Declarative payload validation for task create and update requests.
//!
//! Rules live in a data-driven table (field, constraint, message) evaluated
//! by one generic pass over the raw payload. Create and update share the
//! same table; title uniqueness is not checked here because the repository
//! enforces it atomically at write time.

use crate::task::domain::{DescriptionChange, TaskChanges, TaskDomainError, TaskStatus, TaskTitle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw task payload as received from the wire; all fields optional strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskPayload {
    /// Raw title field.
    pub title: Option<String>,
    /// Raw description field.
    pub description: Option<String>,
    /// Raw status field.
    pub status: Option<String>,
}

/// Payload that passed every validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedTask {
    /// Validated title.
    pub title: TaskTitle,
    /// Description change: absent in the payload means keep the stored
    /// value; a present value replaces it, with whitespace-only clearing it.
    pub description: DescriptionChange,
    /// Parsed workflow status.
    pub status: TaskStatus,
}

impl From<ValidatedTask> for TaskChanges {
    fn from(valid: ValidatedTask) -> Self {
        Self {
            title: valid.title,
            description: valid.description,
            status: valid.status,
        }
    }
}

/// Accumulated validation failures as an ordered field → messages map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error map with a single entry.
    #[must_use]
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Records a failure message against a field.
    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.to_owned());
    }

    /// Returns `true` when no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages recorded against a field.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

/// A single declarative constraint on one payload field.
#[derive(Debug, Clone, Copy)]
enum Constraint {
    /// The field must be present and non-empty after trimming.
    Required,
    /// The field, when present, must not exceed this many characters.
    MaxLength(usize),
    /// The field, when present, must equal one of these values.
    OneOf(&'static [&'static str]),
}

/// One table row: a field, a constraint, and the failure message.
struct FieldRule {
    field: &'static str,
    constraint: Constraint,
    message: &'static str,
}

/// Accepted status wire values.
const STATUS_VALUES: [&str; 3] = ["to-do", "in-progress", "done"];

/// Validation table shared by create and update requests.
///
/// `description` is intentionally absent: it is optional and unconstrained.
const TASK_RULES: [FieldRule; 4] = [
    FieldRule {
        field: "title",
        constraint: Constraint::Required,
        message: "Task title is required.",
    },
    FieldRule {
        field: "title",
        constraint: Constraint::MaxLength(TaskTitle::MAX_LENGTH),
        message: "Task title may not be greater than 255 characters.",
    },
    FieldRule {
        field: "status",
        constraint: Constraint::Required,
        message: "Task status is required.",
    },
    FieldRule {
        field: "status",
        constraint: Constraint::OneOf(&STATUS_VALUES),
        message: "Task status must be one of: To do, In progress, or Done.",
    },
];

/// Message shown when the repository rejects a duplicate title.
pub const DUPLICATE_TITLE_MESSAGE: &str = "Title already exists.";

fn field_value<'a>(payload: &'a TaskPayload, field: &str) -> Option<&'a str> {
    let raw = match field {
        "title" => payload.title.as_deref(),
        "status" => payload.status.as_deref(),
        "description" => payload.description.as_deref(),
        _ => None,
    };
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn check(constraint: Constraint, value: Option<&str>) -> bool {
    match constraint {
        Constraint::Required => value.is_some(),
        Constraint::MaxLength(limit) => {
            value.is_none_or(|present| present.chars().count() <= limit)
        }
        Constraint::OneOf(accepted) => {
            value.is_none_or(|present| accepted.contains(&present))
        }
    }
}

/// Evaluates the rule table against a raw payload.
///
/// # Errors
///
/// Returns the accumulated field → messages map when any rule fails. All
/// failing fields are reported together in one pass.
pub fn validate(payload: &TaskPayload) -> Result<ValidatedTask, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    for rule in &TASK_RULES {
        if !check(rule.constraint, field_value(payload, rule.field)) {
            errors.add(rule.field, rule.message);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let title = build_title(payload, &mut errors);
    let status = build_status(payload, &mut errors);
    match (title, status) {
        (Some(title), Some(status)) => Ok(ValidatedTask {
            title,
            description: build_description(payload),
            status,
        }),
        _ => Err(errors),
    }
}

/// Maps the raw description onto a change: an absent field keeps the stored
/// value, a present one replaces it, and a whitespace-only one clears it.
fn build_description(payload: &TaskPayload) -> DescriptionChange {
    payload.description.as_deref().map_or(
        DescriptionChange::Keep,
        |raw| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                DescriptionChange::Set(None)
            } else {
                DescriptionChange::Set(Some(trimmed.to_owned()))
            }
        },
    )
}

/// Constructs the domain title, mapping domain failures back onto the table
/// messages. The table has already screened the shape, so failures here mean
/// the table and the domain rules drifted apart.
fn build_title(payload: &TaskPayload, errors: &mut ValidationErrors) -> Option<TaskTitle> {
    let raw = field_value(payload, "title")?;
    match TaskTitle::new(raw) {
        Ok(title) => Some(title),
        Err(TaskDomainError::EmptyTitle) => {
            errors.add("title", "Task title is required.");
            None
        }
        Err(TaskDomainError::TitleTooLong { .. }) => {
            errors.add("title", "Task title may not be greater than 255 characters.");
            None
        }
    }
}

/// Parses the status wire value already screened by the table.
fn build_status(payload: &TaskPayload, errors: &mut ValidationErrors) -> Option<TaskStatus> {
    let raw = field_value(payload, "status")?;
    match TaskStatus::try_from(raw) {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add(
                "status",
                "Task status must be one of: To do, In progress, or Done.",
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "Test code uses expect for assertion clarity"
    )]

    use super::*;
    use rstest::rstest;

    fn payload(title: Option<&str>, status: Option<&str>) -> TaskPayload {
        TaskPayload {
            title: title.map(str::to_owned),
            description: None,
            status: status.map(str::to_owned),
        }
    }

    #[rstest]
    fn accepts_complete_payload() {
        let valid = validate(&payload(Some("Write report"), Some("to-do")))
            .expect("payload should validate");
        assert_eq!(valid.title.as_str(), "Write report");
        assert_eq!(valid.status, TaskStatus::ToDo);
        assert_eq!(valid.description, DescriptionChange::Keep);
    }

    #[rstest]
    fn missing_title_and_status_are_reported_together() {
        let errors = validate(&payload(None, None)).expect_err("payload should fail");
        assert_eq!(
            errors.field("title"),
            Some(&["Task title is required.".to_owned()][..])
        );
        assert_eq!(
            errors.field("status"),
            Some(&["Task status is required.".to_owned()][..])
        );
    }

    #[rstest]
    fn whitespace_only_title_counts_as_missing() {
        let errors = validate(&payload(Some("   "), Some("done"))).expect_err("should fail");
        assert_eq!(
            errors.field("title"),
            Some(&["Task title is required.".to_owned()][..])
        );
        assert!(errors.field("status").is_none());
    }

    #[rstest]
    fn overlong_title_is_rejected() {
        let long_title = "x".repeat(256);
        let errors =
            validate(&payload(Some(&long_title), Some("done"))).expect_err("should fail");
        assert_eq!(
            errors.field("title"),
            Some(&["Task title may not be greater than 255 characters.".to_owned()][..])
        );
    }

    #[rstest]
    fn title_at_limit_is_accepted() {
        let title = "x".repeat(255);
        let valid = validate(&payload(Some(&title), Some("in-progress")))
            .expect("payload should validate");
        assert_eq!(valid.status, TaskStatus::InProgress);
    }

    #[rstest]
    #[case("bogus")]
    #[case("todo")]
    #[case("DONE")]
    #[case("in progress")]
    fn unknown_status_is_rejected(#[case] status: &str) {
        let errors = validate(&payload(Some("T"), Some(status))).expect_err("should fail");
        assert_eq!(
            errors.field("status"),
            Some(&["Task status must be one of: To do, In progress, or Done.".to_owned()][..])
        );
    }

    #[rstest]
    fn description_passes_through_trimmed() {
        let raw = TaskPayload {
            title: Some("T1".to_owned()),
            description: Some("  details  ".to_owned()),
            status: Some("done".to_owned()),
        };
        let valid = validate(&raw).expect("payload should validate");
        assert_eq!(
            valid.description,
            DescriptionChange::Set(Some("details".to_owned()))
        );
    }

    #[rstest]
    fn whitespace_only_description_clears() {
        let raw = TaskPayload {
            title: Some("T1".to_owned()),
            description: Some("   ".to_owned()),
            status: Some("done".to_owned()),
        };
        let valid = validate(&raw).expect("payload should validate");
        assert_eq!(valid.description, DescriptionChange::Set(None));
    }

    #[rstest]
    fn absent_description_is_kept() {
        let valid =
            validate(&payload(Some("T1"), Some("done"))).expect("payload should validate");
        assert_eq!(valid.description, DescriptionChange::Keep);
    }

    #[rstest]
    fn errors_serialize_as_field_map() {
        let errors = validate(&payload(None, Some("to-do"))).expect_err("should fail");
        let json = serde_json::to_value(&errors).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"title": ["Task title is required."]})
        );
    }
}
