//! Shared world state for task CRUD BDD scenarios.

use std::sync::Arc;

use jotter::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskService, TaskServiceError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task CRUD behaviour tests.
pub struct TodoWorld {
    pub service: TestTaskService,
    pub last_add_result: Option<Result<Task, TaskServiceError>>,
    pub last_update_result: Option<Result<Task, TaskServiceError>>,
    pub last_toggle_result: Option<Result<Task, TaskServiceError>>,
}

impl TodoWorld {
    /// Creates a world with an empty task store.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );
        Self {
            service,
            last_add_result: None,
            last_update_result: None,
            last_toggle_result: None,
        }
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
