//! Inbound interaction events and their outcomes.

use crate::task::domain::{Assignee, Status, TaskId};
use std::fmt;

/// External input event handled by the interaction controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionEvent {
    /// Shows the creation dialog with a fresh draft.
    OpenCreateDialog,
    /// Hides the creation dialog, discarding the draft.
    CloseCreateDialog,
    /// Changes fields of the creation draft.
    EditCreationDraft {
        /// New title, if changed.
        title: Option<String>,
        /// New assignee, if changed.
        assignee: Option<Assignee>,
    },
    /// Commits the creation draft as a new task.
    SubmitCreation,
    /// Switches the active status tab.
    SelectTab(Status),
    /// Expands the task, or collapses it when already expanded.
    ToggleExpand(TaskId),
    /// Changes fields of the expanded task's edit draft.
    EditDraft {
        /// New comment, if changed.
        comment: Option<String>,
        /// New status, if changed.
        status: Option<Status>,
    },
    /// Commits the edit draft to the expanded task.
    SaveEdit,
}

impl InteractionEvent {
    /// Builds an event that sets the creation draft's title.
    #[must_use]
    pub fn creation_title(title: impl Into<String>) -> Self {
        Self::EditCreationDraft {
            title: Some(title.into()),
            assignee: None,
        }
    }

    /// Builds an event that sets the creation draft's assignee.
    #[must_use]
    pub const fn creation_assignee(assignee: Assignee) -> Self {
        Self::EditCreationDraft {
            title: None,
            assignee: Some(assignee),
        }
    }

    /// Builds an event that sets the edit draft's comment.
    #[must_use]
    pub fn draft_comment(comment: impl Into<String>) -> Self {
        Self::EditDraft {
            comment: Some(comment.into()),
            status: None,
        }
    }

    /// Builds an event that sets the edit draft's status.
    #[must_use]
    pub const fn draft_status(status: Status) -> Self {
        Self::EditDraft {
            comment: None,
            status: Some(status),
        }
    }

    /// Returns a stable name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OpenCreateDialog => "open_create_dialog",
            Self::CloseCreateDialog => "close_create_dialog",
            Self::EditCreationDraft { .. } => "edit_creation_draft",
            Self::SubmitCreation => "submit_creation",
            Self::SelectTab(_) => "select_tab",
            Self::ToggleExpand(_) => "toggle_expand",
            Self::EditDraft { .. } => "edit_draft",
            Self::SaveEdit => "save_edit",
        }
    }
}

/// Outcome of a handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event changed state.
    Applied,
    /// The event was a policy no-op; nothing changed.
    Ignored(IgnoredReason),
}

impl Transition {
    /// Returns whether the event changed state.
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why an event was handled as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    /// The creation draft's title is blank.
    EmptyTitle,
    /// The event needs the creation dialog to be open.
    DialogClosed,
    /// The event needs an expanded task.
    NothingExpanded,
    /// No task has the requested identifier.
    UnknownTask(TaskId),
}

impl fmt::Display for IgnoredReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("task title is empty"),
            Self::DialogClosed => f.write_str("creation dialog is closed"),
            Self::NothingExpanded => f.write_str("no task is expanded"),
            Self::UnknownTask(id) => write!(f, "unknown task {id}"),
        }
    }
}
