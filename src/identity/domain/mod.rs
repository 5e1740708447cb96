//! Domain model for user identity.

mod ids;
mod user;

pub use ids::UserId;
pub use user::{User, UserRole};
