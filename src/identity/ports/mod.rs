//! Port contracts for user identity.

pub mod directory;

pub use directory::{UserDirectory, UserDirectoryError, UserDirectoryResult};
