//! Service layer for task CRUD and completion-status operations.

use crate::task::{
    domain::{Description, Task, TaskDomainError, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input failed a content rule (empty description, invalid id).
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// No task exists for the given identifier.
    #[error("no task found with id {0}")]
    NotFound(TaskId),

    /// The repository failed for an infrastructure reason.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl From<TaskRepositoryError> for TaskServiceError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task management service.
///
/// Sole owner of the task store: all lifecycle mutation flows through these
/// operations, and queries return owned snapshots rather than live handles
/// into storage.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a new task with the next free identifier.
    ///
    /// The description is trimmed and validated before any identifier is
    /// allocated, so a rejected input never consumes an id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when the description is
    /// empty after trimming, or [`TaskServiceError::Repository`] when
    /// storage fails.
    pub async fn add(&self, description: impl Into<String> + Send) -> TaskServiceResult<Task> {
        let description = Description::new(description)?;
        let id = self.repository.allocate_id().await?;
        let task = Task::new(id, description, &*self.clock);
        self.repository.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a snapshot of the task with the given identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage lookup fails.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Returns snapshots of all tasks ordered by ascending identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when storage lookup fails.
    pub async fn list_all(&self) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list_all().await?)
    }

    /// Replaces a task's description, leaving id and status untouched.
    ///
    /// Existence is checked before the new description is validated; a
    /// validation failure leaves the stored task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// id, or [`TaskServiceError::Validation`] when the new description is
    /// empty after trimming.
    pub async fn update(
        &self,
        id: TaskId,
        new_description: impl Into<String> + Send,
    ) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        let description = Description::new(new_description)?;
        task.rename(description, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task permanently. Its identifier is never reassigned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// id.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.remove(id).await?)
    }

    /// Flips a task's completion status and returns the updated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task has the given
    /// id.
    pub async fn toggle_complete(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        task.toggle_status(&*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }
}
