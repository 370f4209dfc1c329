//! Transient, non-persisted view state.

use crate::task::domain::{Assignee, Status, Task, TaskId};
use serde::Serialize;

/// Working copy of the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CreationDraft {
    /// Title as typed; validated only on submit.
    pub title: String,
    /// Selected assignee.
    pub assignee: Assignee,
}

/// Working copy of the expanded task's editable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditDraft {
    /// Pending comment.
    pub comment: String,
    /// Pending status.
    pub status: Status,
}

impl EditDraft {
    fn seeded_from(task: &Task) -> Self {
        Self {
            comment: task.comment().to_owned(),
            status: task.status(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ExpandedTask {
    task_id: TaskId,
    draft: EditDraft,
}

/// View state owned by the interaction controller.
///
/// At most one task is expanded, and an edit draft exists exactly while a
/// task is expanded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    active_tab: Status,
    expanded: Option<ExpandedTask>,
    create_dialog_open: bool,
    creation_draft: CreationDraft,
}

impl ViewState {
    /// Creates the initial state: first tab, nothing expanded, dialog closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status tab currently selected.
    #[must_use]
    pub const fn active_tab(&self) -> Status {
        self.active_tab
    }

    /// Returns the identifier of the expanded task, if any.
    #[must_use]
    pub fn expanded_task_id(&self) -> Option<TaskId> {
        self.expanded.as_ref().map(|expanded| expanded.task_id)
    }

    /// Returns the edit draft of the expanded task, if any.
    #[must_use]
    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.expanded.as_ref().map(|expanded| &expanded.draft)
    }

    /// Returns whether the creation dialog is visible.
    #[must_use]
    pub const fn is_create_dialog_open(&self) -> bool {
        self.create_dialog_open
    }

    /// Returns the creation form draft.
    #[must_use]
    pub const fn creation_draft(&self) -> &CreationDraft {
        &self.creation_draft
    }

    pub(super) fn open_create_dialog(&mut self) {
        self.create_dialog_open = true;
        self.creation_draft = CreationDraft::default();
    }

    pub(super) fn close_create_dialog(&mut self) {
        self.create_dialog_open = false;
        self.creation_draft = CreationDraft::default();
    }

    pub(super) fn creation_draft_mut(&mut self) -> Option<&mut CreationDraft> {
        self.create_dialog_open.then_some(&mut self.creation_draft)
    }

    pub(super) fn finish_creation(&mut self, created_status: Status) {
        self.close_create_dialog();
        self.active_tab = created_status;
    }

    pub(super) fn select_tab(&mut self, status: Status) {
        self.active_tab = status;
        self.expanded = None;
    }

    pub(super) fn expand(&mut self, task: &Task) {
        self.expanded = Some(ExpandedTask {
            task_id: task.id(),
            draft: EditDraft::seeded_from(task),
        });
    }

    pub(super) fn collapse(&mut self) {
        self.expanded = None;
    }

    pub(super) fn edit_draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.expanded.as_mut().map(|expanded| &mut expanded.draft)
    }

    pub(super) fn pending_edit(&self) -> Option<(TaskId, &EditDraft)> {
        self.expanded
            .as_ref()
            .map(|expanded| (expanded.task_id, &expanded.draft))
    }

    pub(super) fn finish_edit(&mut self, saved_status: Status) {
        self.expanded = None;
        self.active_tab = saved_status;
    }
}
