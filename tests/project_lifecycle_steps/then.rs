//! Then steps for project lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rstest_bdd_macros::then;
use taskdeck::session::{Command, CommandOutcome};

#[then("the command succeeds")]
fn command_succeeds(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing command result"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected success, got {err}"));
    }
    Ok(())
}

#[then(r#"the command fails with "{kind}""#)]
fn command_fails_with(world: &LifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing command result"))?;
    match result {
        Err(err) if err.kind.as_str() == kind => Ok(()),
        other => Err(eyre::eyre!("expected {kind} error, got {other:?}")),
    }
}

#[then("the project is not listed")]
fn project_is_not_listed(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?;
    let outcome = world
        .execute(Command::ListProjects)
        .map_err(|err| eyre::eyre!("listing projects failed: {err}"))?;
    let CommandOutcome::Projects(views) = outcome else {
        return Err(eyre::eyre!("expected a project list, got {outcome:?}"));
    };
    if views.iter().any(|view| view.id == project_id) {
        return Err(eyre::eyre!("deleted project {project_id} is still listed"));
    }
    Ok(())
}

#[then("the project has no listed tasks")]
fn project_has_no_listed_tasks(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project_id()?;
    let outcome = world
        .execute(Command::ListTasksByProject { project_id })
        .map_err(|err| eyre::eyre!("listing tasks failed: {err}"))?;
    let CommandOutcome::Tasks(views) = outcome else {
        return Err(eyre::eyre!("expected a task list, got {outcome:?}"));
    };
    if !views.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", views.len()));
    }
    Ok(())
}
