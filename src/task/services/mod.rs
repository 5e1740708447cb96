//! Application services for the task module.

mod policy;

pub use policy::TaskPolicy;
