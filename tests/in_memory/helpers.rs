//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use task_tracker::{
    interaction::{InteractionController, InteractionEvent, Transition},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Assignee, Task},
        services::{CreateTaskRequest, TaskLifecycleService},
    },
};

/// Task store service backed by the in-memory repository.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Controller backed by the in-memory repository.
pub type TestController = InteractionController<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh task store for each test.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a fresh controller for each test.
#[fixture]
pub fn controller(service: TestService) -> TestController {
    InteractionController::new(service)
}

/// Creates a task directly through the store.
///
/// # Errors
///
/// Returns an error if the store rejects the task.
pub fn seed(
    service: &TestService,
    title: &str,
    assignee: Assignee,
) -> Result<Task, Box<dyn std::error::Error + Send + Sync>> {
    Ok(service.create(CreateTaskRequest::new(title, assignee))?)
}

/// Dispatches a sequence of events, returning their outcomes.
///
/// # Errors
///
/// Returns an error if any event violates a store invariant.
pub fn play(
    controller: &mut TestController,
    events: impl IntoIterator<Item = InteractionEvent>,
) -> Result<Vec<Transition>, Box<dyn std::error::Error + Send + Sync>> {
    events
        .into_iter()
        .map(|event| controller.dispatch(event).map_err(Into::into))
        .collect()
}
