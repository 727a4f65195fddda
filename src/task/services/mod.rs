//! Application services for task management.

mod manager;

pub use manager::{TaskService, TaskServiceError, TaskServiceResult};
