//! Interaction controller and transient view state.
//!
//! The controller is the single mediator between external input events and
//! the task store. Each event is applied to completion before the next one is
//! accepted, and an event either applies fully or leaves both the store and
//! the view untouched.
//!
//! - [`ViewState`]: active tab, expanded task, and in-progress form drafts
//! - [`InteractionEvent`]: inbound events from a rendering collaborator
//! - [`InteractionController`]: applies events and answers view queries
//! - [`ViewSnapshot`]: serialisable picture of what the user currently sees

mod controller;
mod event;
mod snapshot;
mod view_state;

pub use controller::{InteractionController, InteractionError, InteractionResult};
pub use event::{IgnoredReason, InteractionEvent, Transition};
pub use snapshot::{TabView, ViewSnapshot};
pub use view_state::{CreationDraft, EditDraft, ViewState};
