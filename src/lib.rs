//! Task tracker: task lifecycle and view-state engine.
//!
//! Tasks are created, assigned to a person from a fixed directory, and moved
//! through a fixed sequence of statuses. The engine keeps the authoritative
//! task collection and the transient state a renderer needs to show tasks
//! grouped by status in tabs.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for task storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Status and assignee vocabularies and the task store
//! - [`interaction`]: Event handling and view state
//! - [`config`]: Runtime configuration for binaries
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod interaction;
pub mod task;
pub mod telemetry;
