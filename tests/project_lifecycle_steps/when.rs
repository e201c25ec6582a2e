//! When steps for project lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rstest_bdd_macros::when;
use taskdeck::session::Command;

#[when("the project is activated")]
fn project_is_activated(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    world.last_result = Some(world.execute(Command::ActivateProject { id }));
    Ok(())
}

#[when("the task is completed")]
fn task_is_completed(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.task_id()?;
    world.last_result = Some(world.execute(Command::CompleteTask { id }));
    Ok(())
}

#[when("the project is deleted")]
fn project_is_deleted(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let id = world.project_id()?;
    world.last_result = Some(world.execute(Command::DeleteProject { id }));
    Ok(())
}

#[when(r#"a project named "{name}" is created"#)]
fn project_is_created(world: &mut LifecycleWorld, name: String) {
    world.last_result = Some(world.execute(Command::CreateProject {
        name,
        description: None,
    }));
}
