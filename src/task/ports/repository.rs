//! Repository port for the authoritative task collection.

use crate::task::domain::{Status, Task, TaskId};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task collection contract.
///
/// # Implementation Notes
///
/// Implementations must ensure:
/// - Task IDs are unique and never handed out twice
/// - Queries return tasks in insertion order
/// - Updates replace a task in place without reordering the collection
/// - No operation removes a task
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Allocates the identifier for the next task to be stored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn next_task_id(&self) -> TaskRepositoryResult<TaskId>;

    /// Appends a new task to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task, keeping its position in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns all tasks in the given status, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn find_by_status(&self, status: Status) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the backing store is
    /// unavailable.
    fn all(&self) -> TaskRepositoryResult<Vec<Task>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Storage-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a storage-layer error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
