//! Unit tests for the response envelope shape.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes into serialized JSON values"
)]

use crate::api::{ApiError, ApiResponse, ValidationErrors};
use rstest::rstest;

#[rstest]
fn ok_envelope_omits_absent_fields() {
    let response = ApiResponse::ok(serde_json::json!({"id": 1}));
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json, serde_json::json!({"success": true, "data": {"id": 1}}));
}

#[rstest]
fn ok_with_message_includes_both() {
    let response =
        ApiResponse::ok_with_message("Task created successfully.", serde_json::json!("t"));
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "message": "Task created successfully.",
            "data": "t"
        })
    );
}

#[rstest]
fn message_only_envelope_matches_delete_response() {
    let response = ApiResponse::<()>::message_only("Task deleted successfully.");
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "success": true,
            "message": "Task deleted successfully."
        })
    );
}

#[rstest]
fn validation_error_envelope_carries_field_map() {
    let err = ApiError::Validation(ValidationErrors::single(
        "title",
        "Task title is required.",
    ));
    let response = ApiResponse::<()>::from_error(&err);
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "success": false,
            "message": "Validation errors",
            "errors": {"title": ["Task title is required."]}
        })
    );
    assert_eq!(err.status_code(), 422);
}

#[rstest]
fn forbidden_envelope_has_no_errors_map() {
    let response = ApiResponse::<()>::from_error(&ApiError::Forbidden);
    let json = serde_json::to_value(&response).expect("serialize");
    assert_eq!(json["success"], serde_json::json!(false));
    assert!(json.get("errors").is_none());
}
