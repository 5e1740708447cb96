//! CRUD facade and request-boundary concerns.
//!
//! This module holds everything that sits between an HTTP layer (out of
//! scope, supplied by the host) and the task core: declarative payload
//! validation, the `{success, message, data, errors}` response envelope,
//! the API error taxonomy, and the [`TaskApi`] facade orchestrating the
//! store, policy, cache, and notification queue.

mod envelope;
mod error;
mod facade;
pub mod validation;

pub use envelope::ApiResponse;
pub use error::{ApiError, ApiResult};
pub use facade::{CREATED_MESSAGE, DELETED_MESSAGE, TaskApi, UPDATED_MESSAGE};
pub use validation::{TaskPayload, ValidatedTask, ValidationErrors};

#[cfg(test)]
mod tests;
