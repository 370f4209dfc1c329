//! In-memory adapter implementations.
//!
//! The tracker keeps its collection for the lifetime of the process, so the
//! in-memory adapter is the production store as well as the test double.

mod task;

pub use task::InMemoryTaskRepository;
