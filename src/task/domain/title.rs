//! Validated task title scalar.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty task title bounded by the persisted column width.
///
/// Titles are unique across the whole store; uniqueness is enforced at write
/// time by the repository, not here.
///
/// # Examples
///
/// ```
/// use taskdeck::task::domain::TaskTitle;
///
/// let title = TaskTitle::new("  Ship the release  ")?;
/// assert_eq!(title.as_str(), "Ship the release");
///
/// assert!(TaskTitle::new("   ").is_err());
/// # Ok::<(), taskdeck::task::domain::TaskDomainError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Maximum permitted title length in characters.
    pub const MAX_LENGTH: usize = 255;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty after
    /// trimming, or [`TaskDomainError::TitleTooLong`] when it exceeds
    /// [`Self::MAX_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let char_count = trimmed.chars().count();
        if char_count > Self::MAX_LENGTH {
            return Err(TaskDomainError::TitleTooLong {
                limit: Self::MAX_LENGTH,
                actual: char_count,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
