//! Domain model for task records.
//!
//! The task domain models ownership, title validation, status transitions,
//! and timestamp maintenance while keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod status;
mod task;
mod title;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use status::{StatusFilter, TaskStatus};
pub use task::{DescriptionChange, PersistedTaskData, Task, TaskChanges};
pub use title::TaskTitle;
