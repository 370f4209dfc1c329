//! Domain model for the task tracker.
//!
//! Holds the closed status and assignee vocabularies and the task aggregate,
//! keeping storage and presentation concerns outside the domain boundary.

mod assignee;
mod error;
mod ids;
mod status;
mod task;

pub use assignee::Assignee;
pub use error::{ParseAssigneeError, ParseStatusError, TaskDomainError};
pub use ids::{TaskId, TaskTitle};
pub use status::Status;
pub use task::Task;
