//! In-memory repository holding the session's task collection.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Status, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe, insertion-ordered in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    positions: HashMap<TaskId, usize>,
    last_issued: Option<TaskId>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn next_task_id(&self) -> TaskRepositoryResult<TaskId> {
        let mut state = self.write()?;
        let id = state.last_issued.map_or_else(|| TaskId::new(1), TaskId::next);
        state.last_issued = Some(id);
        Ok(id)
    }

    fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if state.positions.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }

        let position = state.tasks.len();
        state.positions.insert(task.id(), position);
        state.tasks.push(task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let position = state
            .positions
            .get(&task.id())
            .copied()
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        let slot = state
            .tasks
            .get_mut(position)
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        let task = state
            .positions
            .get(&id)
            .and_then(|position| state.tasks.get(*position))
            .cloned();
        Ok(task)
    }

    fn find_by_status(&self, status: Status) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    fn all(&self) -> TaskRepositoryResult<Vec<Task>> {
        Ok(self.read()?.tasks.clone())
    }
}
