//! Directory of people a task can be assigned to.

use super::ParseAssigneeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person eligible for task assignment.
///
/// The directory is closed; an assignee is purely a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assignee {
    /// Alice.
    Alice,
    /// Bob.
    Bob,
    /// Charlie.
    Charlie,
    /// Diana.
    Diana,
}

impl Assignee {
    /// Every assignee in directory order.
    pub const ALL: [Self; 4] = [Self::Alice, Self::Bob, Self::Charlie, Self::Diana];

    /// Returns the ordered assignee directory.
    #[must_use]
    pub const fn values() -> &'static [Self] {
        &Self::ALL
    }

    /// Returns the assignee preselected in a fresh creation form.
    #[must_use]
    pub const fn first() -> Self {
        Self::Alice
    }

    /// Returns whether `value` names a member of the directory.
    #[must_use]
    pub fn contains(value: &str) -> bool {
        Self::try_from(value).is_ok()
    }

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alice => "alice",
            Self::Bob => "bob",
            Self::Charlie => "charlie",
            Self::Diana => "diana",
        }
    }

    /// Returns the display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alice => "Alice",
            Self::Bob => "Bob",
            Self::Charlie => "Charlie",
            Self::Diana => "Diana",
        }
    }
}

impl Default for Assignee {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Assignee {
    type Error = ParseAssigneeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|assignee| assignee.as_str() == normalized)
            .ok_or_else(|| ParseAssigneeError(value.to_owned()))
    }
}
