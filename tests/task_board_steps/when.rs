//! When steps for task board BDD scenarios.

use super::world::TaskBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use task_tracker::{
    interaction::{InteractionEvent, Transition},
    task::domain::{Assignee, Status},
};

/// Runs the full creation dialog flow and remembers the new task's id.
pub fn create_task(
    world: &mut TaskBoardWorld,
    title: &str,
    assignee: &str,
) -> Result<(), eyre::Report> {
    let person = Assignee::try_from(assignee).wrap_err("scenario assignee")?;
    world.dispatch(InteractionEvent::OpenCreateDialog)?;
    world.dispatch(InteractionEvent::creation_title(title))?;
    world.dispatch(InteractionEvent::creation_assignee(person))?;
    let outcome = world.dispatch(InteractionEvent::SubmitCreation)?;
    eyre::ensure!(
        outcome == Transition::Applied,
        "creation was not applied: {outcome:?}"
    );

    let created = world
        .controller
        .tasks()
        .all()
        .map_err(|err| eyre::eyre!("list failed: {err}"))?
        .into_iter()
        .last()
        .ok_or_else(|| eyre::eyre!("created task missing from the store"))?;
    world.tasks_by_title.insert(title.to_owned(), created.id());
    Ok(())
}

#[when(r#"the user creates a task "{title}" assigned to "{assignee}""#)]
fn user_creates_task(
    world: &mut TaskBoardWorld,
    title: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    create_task(world, &title, &assignee)
}

#[when("the user opens the creation dialog")]
fn user_opens_dialog(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.dispatch(InteractionEvent::OpenCreateDialog)?;
    Ok(())
}

#[when("the user types a blank title")]
fn user_types_blank_title(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.dispatch(InteractionEvent::creation_title("   "))?;
    Ok(())
}

#[when("the user submits the creation form")]
fn user_submits_creation(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.dispatch(InteractionEvent::SubmitCreation)?;
    Ok(())
}

#[when(r#"the user toggles "{title}""#)]
fn user_toggles_task(world: &mut TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let id = world.task_id(&title)?;
    world.dispatch(InteractionEvent::ToggleExpand(id))?;
    Ok(())
}

#[when(r#"the user sets the draft status to "{status}""#)]
fn user_sets_draft_status(world: &mut TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = Status::try_from(status.as_str()).wrap_err("scenario status")?;
    world.dispatch(InteractionEvent::draft_status(parsed))?;
    Ok(())
}

#[when(r#"the user sets the draft comment to "{comment}""#)]
fn user_sets_draft_comment(
    world: &mut TaskBoardWorld,
    comment: String,
) -> Result<(), eyre::Report> {
    world.dispatch(InteractionEvent::draft_comment(comment))?;
    Ok(())
}

#[when("the user saves the edit")]
fn user_saves_edit(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world.dispatch(InteractionEvent::SaveEdit)?;
    Ok(())
}

#[when(r#"the user selects the "{status}" tab"#)]
fn user_selects_tab(world: &mut TaskBoardWorld, status: String) -> Result<(), eyre::Report> {
    let parsed = Status::try_from(status.as_str()).wrap_err("scenario status")?;
    world.dispatch(InteractionEvent::SelectTab(parsed))?;
    Ok(())
}
