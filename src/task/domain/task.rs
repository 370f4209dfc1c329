//! Task aggregate root.

use super::{Assignee, Status, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A unit of work tracked through the status vocabulary.
///
/// `id`, `title`, `assignee` and `created_at` are fixed at creation. Only the
/// comment and status change afterwards, through [`Task::apply_edit`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    assignee: Assignee,
    comment: String,
    status: Status,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with an empty comment in the first status.
    #[must_use]
    pub fn new(id: TaskId, title: TaskTitle, assignee: Assignee, clock: &impl Clock) -> Self {
        Self {
            id,
            title,
            assignee,
            comment: String::new(),
            status: Status::first(),
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> Assignee {
        self.assignee
    }

    /// Returns the free-form comment.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the comment and status, leaving every other field intact.
    pub fn apply_edit(&mut self, comment: impl Into<String>, status: Status) {
        self.comment = comment.into();
        self.status = status;
    }
}
