//! Then steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::then;
use task_tracker::{
    interaction::{IgnoredReason, Transition},
    task::domain::{Assignee, Status},
};

fn tab_titles(world: &TaskBoardWorld, status: &str) -> Result<Vec<String>, eyre::Report> {
    let parsed = Status::try_from(status).wrap_err("scenario status")?;
    let tasks = world
        .controller
        .list_by_status(parsed)
        .map_err(|err| eyre::eyre!("list failed: {err}"))?;
    Ok(tasks
        .iter()
        .map(|task| task.title().as_str().to_owned())
        .collect())
}

#[then(r#"the "{status}" tab lists "{title}""#)]
fn tab_lists(world: &TaskBoardWorld, status: String, title: String) -> Result<(), eyre::Report> {
    let titles = tab_titles(world, &status)?;
    eyre::ensure!(
        titles.contains(&title),
        "expected '{title}' under {status}, found {titles:?}"
    );
    Ok(())
}

#[then(r#"the "{status}" tab does not list "{title}""#)]
fn tab_does_not_list(
    world: &TaskBoardWorld,
    status: String,
    title: String,
) -> Result<(), eyre::Report> {
    let titles = tab_titles(world, &status)?;
    eyre::ensure!(
        !titles.contains(&title),
        "did not expect '{title}' under {status}"
    );
    Ok(())
}

#[then(r#"the active tab is "{status}""#)]
fn active_tab_is(world: &TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str()).wrap_err("scenario status")?;
    let actual = world.controller.view_state().active_tab();
    eyre::ensure!(
        actual == expected,
        "expected active tab {expected}, found {actual}"
    );
    Ok(())
}

#[then("no task is expanded")]
fn no_task_expanded(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let expanded = world.controller.view_state().expanded_task_id();
    eyre::ensure!(expanded.is_none(), "expected no expanded task, found {expanded:?}");
    Ok(())
}

#[then(r#""{title}" is still assigned to "{assignee}""#)]
fn still_assigned(
    world: &TaskBoardWorld,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let expected = Assignee::try_from(assignee.as_str()).wrap_err("scenario assignee")?;
    let task = world.stored_task(&title)?;
    eyre::ensure!(task.assignee() == expected, "assignee changed");
    eyre::ensure!(task.title().as_str() == title, "title changed");
    Ok(())
}

#[then(r#""{title}" has an empty comment and status "{status}""#)]
fn unchanged_task(
    world: &TaskBoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = Status::try_from(status.as_str()).wrap_err("scenario status")?;
    let task = world.stored_task(&title)?;
    eyre::ensure!(task.comment().is_empty(), "comment was saved: {}", task.comment());
    eyre::ensure!(task.status() == expected, "status changed to {}", task.status());
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &TaskBoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world
        .controller
        .tasks()
        .count()
        .map_err(|err| eyre::eyre!("count failed: {err}"))?;
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then("the submission is ignored for an empty title")]
fn submission_ignored(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_outcome == Some(Transition::Ignored(IgnoredReason::EmptyTitle)),
        "expected a silent empty-title rejection, got {:?}",
        world.last_outcome
    );
    Ok(())
}

#[then("the creation dialog is open")]
fn creation_dialog_open(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.controller.view_state().is_create_dialog_open(),
        "expected the creation dialog to stay open"
    );
    Ok(())
}
