//! Task lifecycle status vocabulary.

use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a task.
///
/// Declaration order is the tab display order. Any status is reachable from
/// any other through an explicit edit; the order implies no pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl Status {
    /// Every status in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Done];

    /// Returns the ordered status vocabulary.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the status assigned to newly created tasks.
    #[must_use]
    pub const fn first() -> Self {
        Self::Pending
    }

    /// Returns whether `value` names a member of the vocabulary.
    ///
    /// Accepts both the canonical form (`in_progress`) and the display label
    /// (`In Progress`).
    #[must_use]
    pub fn contains(value: &str) -> bool {
        Self::try_from(value).is_ok()
    }

    /// Returns the zero-based tab position of the status.
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    /// Returns the human-readable tab label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Status {
    type Error = ParseStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "in progress" | "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseStatusError(value.to_owned())),
        }
    }
}
