//! Serialisable view of what the rendering collaborator should display.

use super::{CreationDraft, EditDraft};
use crate::task::domain::{Status, Task, TaskId};
use serde::Serialize;

/// One status tab with its task count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    /// Status the tab filters on.
    pub status: Status,
    /// Display label.
    pub label: &'static str,
    /// Number of tasks currently in the status.
    pub task_count: usize,
    /// Whether this is the active tab.
    pub active: bool,
}

/// Point-in-time picture of the view state and the active tab's tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Selected status tab.
    pub active_tab: Status,
    /// All tabs in display order.
    pub tabs: Vec<TabView>,
    /// Tasks of the active tab, in creation order.
    pub visible_tasks: Vec<Task>,
    /// Expanded task, if any.
    pub expanded_task_id: Option<TaskId>,
    /// Unsaved edits of the expanded task.
    pub edit_draft: Option<EditDraft>,
    /// Whether the creation dialog is visible.
    pub create_dialog_open: bool,
    /// Unsubmitted creation form.
    pub creation_draft: CreationDraft,
}

impl ViewSnapshot {
    /// Returns the visible task with the given identifier.
    #[must_use]
    pub fn visible_task(&self, id: TaskId) -> Option<&Task> {
        self.visible_tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the tab for `status`.
    #[must_use]
    pub fn tab(&self, status: Status) -> Option<&TabView> {
        self.tabs.iter().find(|tab| tab.status == status)
    }
}
