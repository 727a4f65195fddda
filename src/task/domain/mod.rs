//! Domain model for task management.
//!
//! The task domain models validated todo records and their completion
//! lifecycle while keeping all infrastructure concerns outside of the
//! domain boundary.

mod error;
mod ids;
mod task;

pub use error::TaskDomainError;
pub use ids::{Description, TaskId};
pub use task::{CompletionStatus, Task};
