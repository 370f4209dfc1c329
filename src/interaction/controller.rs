//! Event mediator between the rendering collaborator and the task store.

use super::{IgnoredReason, InteractionEvent, TabView, Transition, ViewSnapshot, ViewState};
use crate::task::{
    domain::{Assignee, Status, Task, TaskDomainError, TaskId},
    ports::TaskRepository,
    services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService, UpdateTaskRequest},
};
use mockable::Clock;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Invariant violations surfaced while handling an event.
///
/// These are unreachable when events are wired from the view's own state.
/// When one is returned, neither the store nor the view has changed.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// The view referenced a task the store does not hold.
    #[error("task {0} referenced by the view does not exist")]
    TaskNotFound(TaskId),
    /// The task store failed.
    #[error(transparent)]
    Store(TaskLifecycleError),
}

impl From<TaskLifecycleError> for InteractionError {
    fn from(err: TaskLifecycleError) -> Self {
        err.not_found_id()
            .map_or_else(|| Self::Store(err), Self::TaskNotFound)
    }
}

/// Result type for interaction controller operations.
pub type InteractionResult<T> = Result<T, InteractionError>;

/// Owns the task store and the view state for one session.
pub struct InteractionController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: TaskLifecycleService<R, C>,
    view: ViewState,
}

impl<R, C> InteractionController<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a controller in the initial view state.
    #[must_use]
    pub fn new(tasks: TaskLifecycleService<R, C>) -> Self {
        Self {
            tasks,
            view: ViewState::new(),
        }
    }

    /// Applies one event to completion.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError`] only when the store reports an invariant
    /// violation; policy rejections come back as [`Transition::Ignored`].
    pub fn dispatch(&mut self, event: InteractionEvent) -> InteractionResult<Transition> {
        let kind = event.kind();
        let outcome = match event {
            InteractionEvent::OpenCreateDialog => {
                self.view.open_create_dialog();
                Ok(Transition::Applied)
            }
            InteractionEvent::CloseCreateDialog => {
                self.view.close_create_dialog();
                Ok(Transition::Applied)
            }
            InteractionEvent::EditCreationDraft { title, assignee } => {
                Ok(self.edit_creation_draft(title, assignee))
            }
            InteractionEvent::SubmitCreation => self.submit_creation(),
            InteractionEvent::SelectTab(status) => {
                self.view.select_tab(status);
                Ok(Transition::Applied)
            }
            InteractionEvent::ToggleExpand(id) => self.toggle_expand(id),
            InteractionEvent::EditDraft { comment, status } => Ok(self.edit_draft(comment, status)),
            InteractionEvent::SaveEdit => self.save_edit(),
        };
        log_outcome(kind, &outcome);
        outcome
    }

    fn edit_creation_draft(
        &mut self,
        title: Option<String>,
        assignee: Option<Assignee>,
    ) -> Transition {
        let Some(draft) = self.view.creation_draft_mut() else {
            return Transition::Ignored(IgnoredReason::DialogClosed);
        };
        if let Some(new_title) = title {
            draft.title = new_title;
        }
        if let Some(new_assignee) = assignee {
            draft.assignee = new_assignee;
        }
        Transition::Applied
    }

    fn submit_creation(&mut self) -> InteractionResult<Transition> {
        if !self.view.is_create_dialog_open() {
            return Ok(Transition::Ignored(IgnoredReason::DialogClosed));
        }
        let draft = self.view.creation_draft();
        let request = CreateTaskRequest::new(draft.title.clone(), draft.assignee);
        match self.tasks.create(request) {
            Ok(created) => {
                // Switch to the new task's tab so it is immediately visible.
                self.view.finish_creation(created.status());
                Ok(Transition::Applied)
            }
            Err(TaskLifecycleError::Domain(TaskDomainError::EmptyTitle)) => {
                Ok(Transition::Ignored(IgnoredReason::EmptyTitle))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn toggle_expand(&mut self, id: TaskId) -> InteractionResult<Transition> {
        if self.view.expanded_task_id() == Some(id) {
            self.view.collapse();
            return Ok(Transition::Applied);
        }

        let Some(task) = self.tasks.find_by_id(id)? else {
            warn!(task_id = %id, "cannot expand a task the store does not hold");
            return Ok(Transition::Ignored(IgnoredReason::UnknownTask(id)));
        };
        self.view.expand(&task);
        Ok(Transition::Applied)
    }

    fn edit_draft(&mut self, comment: Option<String>, status: Option<Status>) -> Transition {
        let Some(draft) = self.view.edit_draft_mut() else {
            return Transition::Ignored(IgnoredReason::NothingExpanded);
        };
        if let Some(new_comment) = comment {
            draft.comment = new_comment;
        }
        if let Some(new_status) = status {
            draft.status = new_status;
        }
        Transition::Applied
    }

    fn save_edit(&mut self) -> InteractionResult<Transition> {
        let Some((task_id, draft)) = self.view.pending_edit() else {
            return Ok(Transition::Ignored(IgnoredReason::NothingExpanded));
        };

        let request = UpdateTaskRequest::new(task_id, draft.comment.clone(), draft.status);
        let saved = self.tasks.update(request)?;
        // The view follows the task to its new tab.
        self.view.finish_edit(saved.status());
        Ok(Transition::Applied)
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Returns the underlying task store service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskLifecycleService<R, C> {
        &self.tasks
    }

    /// Returns the tasks in `status`, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::Store`] when the store lookup fails.
    pub fn list_by_status(&self, status: Status) -> InteractionResult<Vec<Task>> {
        Ok(self.tasks.list_by_status(status)?)
    }

    /// Looks up a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::Store`] when the store lookup fails.
    pub fn find_by_id(&self, id: TaskId) -> InteractionResult<Option<Task>> {
        Ok(self.tasks.find_by_id(id)?)
    }

    /// Returns the tasks of the active tab.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::Store`] when the store lookup fails.
    pub fn visible_tasks(&self) -> InteractionResult<Vec<Task>> {
        self.list_by_status(self.view.active_tab())
    }

    /// Captures the view state together with the active tab's tasks.
    ///
    /// # Errors
    ///
    /// Returns [`InteractionError::Store`] when the store lookup fails.
    pub fn snapshot(&self) -> InteractionResult<ViewSnapshot> {
        let all = self.tasks.all()?;
        let active_tab = self.view.active_tab();
        let tabs = Status::values()
            .iter()
            .map(|status| TabView {
                status: *status,
                label: status.label(),
                task_count: all.iter().filter(|task| task.status() == *status).count(),
                active: *status == active_tab,
            })
            .collect();
        let visible_tasks = all
            .into_iter()
            .filter(|task| task.status() == active_tab)
            .collect();

        Ok(ViewSnapshot {
            active_tab,
            tabs,
            visible_tasks,
            expanded_task_id: self.view.expanded_task_id(),
            edit_draft: self.view.edit_draft().cloned(),
            create_dialog_open: self.view.is_create_dialog_open(),
            creation_draft: self.view.creation_draft().clone(),
        })
    }
}

fn log_outcome(kind: &'static str, outcome: &InteractionResult<Transition>) {
    match outcome {
        Ok(Transition::Applied) => debug!(event = kind, "event applied"),
        Ok(Transition::Ignored(reason)) => debug!(event = kind, %reason, "event ignored"),
        Err(err) => error!(event = kind, error = %err, "event violated a store invariant"),
    }
}
