//! Service layer for task creation, editing, and lookup.

use crate::task::{
    domain::{Assignee, Status, Task, TaskDomainError, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    assignee: Assignee,
}

impl CreateTaskRequest {
    /// Creates a request from raw form input.
    #[must_use]
    pub fn new(title: impl Into<String>, assignee: Assignee) -> Self {
        Self {
            title: title.into(),
            assignee,
        }
    }
}

/// Request payload for editing a task's comment and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    task_id: TaskId,
    comment: String,
    status: Status,
}

impl UpdateTaskRequest {
    /// Creates an edit request for an existing task.
    #[must_use]
    pub fn new(task_id: TaskId, comment: impl Into<String>, status: Status) -> Self {
        Self {
            task_id,
            comment: comment.into(),
            status,
        }
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Returns the missing task identifier when the error is a lookup miss.
    #[must_use]
    pub const fn not_found_id(&self) -> Option<TaskId> {
        match self {
            Self::Repository(TaskRepositoryError::NotFound(id)) => Some(*id),
            _ => None,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task store orchestration service.
///
/// Validation runs before any repository call, so a rejected request leaves
/// the collection untouched and consumes no identifier.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a task with an empty comment in the first status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the title is blank, or
    /// [`TaskLifecycleError::Repository`] when the repository rejects the
    /// task.
    pub fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest { title, assignee } = request;
        let validated_title = TaskTitle::new(title)?;
        let id = self.repository.next_task_id()?;
        let task = Task::new(id, validated_title, assignee, &*self.clock);
        self.repository.store(&task)?;
        info!(task_id = %task.id(), assignee = %task.assignee(), "task created");
        Ok(task)
    }

    /// Replaces the comment and status of an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] wrapping
    /// [`TaskRepositoryError::NotFound`] when no task has the identifier.
    pub fn update(&self, request: UpdateTaskRequest) -> TaskLifecycleResult<Task> {
        let UpdateTaskRequest {
            task_id,
            comment,
            status,
        } = request;
        let mut task = self
            .repository
            .find_by_id(task_id)?
            .ok_or(TaskRepositoryError::NotFound(task_id))?;
        let previous_status = task.status();
        task.apply_edit(comment, status);
        self.repository.update(&task)?;
        info!(
            task_id = %task_id,
            from = %previous_status,
            to = %status,
            "task updated"
        );
        Ok(task)
    }

    /// Returns the tasks in `status`, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub fn list_by_status(&self, status: Status) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_status(status)?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no task has the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// Returns every task in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub fn all(&self) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.all()?)
    }

    /// Returns the number of tasks in the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub fn count(&self) -> TaskLifecycleResult<usize> {
        Ok(self.repository.all()?.len())
    }
}
