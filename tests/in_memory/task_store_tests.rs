//! Integration tests for task store operations.

use super::helpers::{TestService, seed, service};
use rstest::rstest;
use std::collections::HashSet;
use task_tracker::task::{
    domain::{Assignee, Status, TaskId},
    services::{CreateTaskRequest, TaskLifecycleError, UpdateTaskRequest},
};

#[rstest]
fn every_created_task_has_a_unique_id(service: TestService) {
    let mut seen = HashSet::new();
    for (n, assignee) in Assignee::ALL.into_iter().cycle().take(200).enumerate() {
        let task = seed(&service, &format!("Task {n}"), assignee).expect("creation should succeed");
        assert!(seen.insert(task.id()), "duplicate id {}", task.id());
    }
    assert_eq!(service.count().expect("count should succeed"), 200);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn blank_titles_never_change_store_size(service: TestService, #[case] title: &str) {
    seed(&service, "Keep me", Assignee::Alice).expect("creation should succeed");

    let result = service.create(CreateTaskRequest::new(title, Assignee::Diana));

    assert!(matches!(result, Err(TaskLifecycleError::Domain(_))));
    assert_eq!(service.count().expect("count should succeed"), 1);
}

#[rstest]
fn titles_are_kept_as_typed(service: TestService) {
    let task = seed(&service, "  Write report  ", Assignee::Bob).expect("creation should succeed");
    assert_eq!(task.title().as_str(), "  Write report  ");

    let stored = service
        .find_by_id(task.id())
        .expect("lookup should succeed")
        .expect("task should be stored");
    assert_eq!(stored.title(), task.title());
}

#[rstest]
fn list_by_status_is_an_exact_ordered_partition(service: TestService) {
    let created: Vec<_> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|title| seed(&service, title, Assignee::Alice).expect("creation should succeed"))
        .collect();
    let moves = [(1_usize, Status::InProgress), (3, Status::Done), (4, Status::InProgress)];
    for (index, status) in moves {
        let task = created.get(index).expect("seeded task");
        service
            .update(UpdateTaskRequest::new(task.id(), "", status))
            .expect("update should succeed");
    }

    let titles = |status| -> Vec<String> {
        service
            .list_by_status(status)
            .expect("query should succeed")
            .iter()
            .map(|task| task.title().to_string())
            .collect()
    };

    assert_eq!(titles(Status::Pending), vec!["A", "C"]);
    assert_eq!(titles(Status::InProgress), vec!["B", "E"]);
    assert_eq!(titles(Status::Done), vec!["D"]);
    assert_eq!(titles(Status::InProgress), titles(Status::InProgress));

    let total: usize = Status::ALL
        .into_iter()
        .map(|status| titles(status).len())
        .sum();
    assert_eq!(total, created.len());
}

#[rstest]
fn any_status_is_reachable_from_any_other(service: TestService) {
    let task = seed(&service, "Bounce", Assignee::Charlie).expect("creation should succeed");

    for status in [Status::Done, Status::Pending, Status::InProgress, Status::Pending] {
        let updated = service
            .update(UpdateTaskRequest::new(task.id(), "moved", status))
            .expect("update should succeed");
        assert_eq!(updated.status(), status);
    }
}

#[rstest]
fn update_of_unknown_id_fails_without_side_effects(service: TestService) {
    let existing = seed(&service, "Existing", Assignee::Alice).expect("creation should succeed");

    let result = service.update(UpdateTaskRequest::new(TaskId::new(1000), "x", Status::Done));

    assert!(matches!(
        result,
        Err(ref err) if err.not_found_id() == Some(TaskId::new(1000))
    ));
    assert_eq!(
        service.all().expect("list should succeed"),
        vec![existing]
    );
}
