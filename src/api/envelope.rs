//! Response envelope shared by every endpoint.
//!
//! All responses are shaped `{success, message?, data?, errors?}`; absent
//! fields are omitted rather than serialized as null.

use crate::api::error::ApiError;
use crate::api::validation::ValidationErrors;
use serde::Serialize;

/// Wire envelope wrapping endpoint payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable outcome message, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint payload on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Field → messages map on validation failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying data.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            errors: None,
        }
    }

    /// Successful response carrying data and a message.
    #[must_use]
    pub fn ok_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            errors: None,
        }
    }

    /// Successful response carrying only a message.
    #[must_use]
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            errors: None,
        }
    }

    /// Failure response derived from an API error.
    #[must_use]
    pub fn from_error(err: &ApiError) -> Self {
        match err {
            ApiError::Validation(errors) => Self {
                success: false,
                message: Some("Validation errors".to_owned()),
                data: None,
                errors: Some(errors.clone()),
            },
            other => Self {
                success: false,
                message: Some(other.to_string()),
                data: None,
                errors: None,
            },
        }
    }
}
