//! Project deletion cascades and soft-delete visibility.

use super::helpers::{Deck, deck, expect_project, expect_task};
use eyre::ensure;
use rstest::rstest;
use taskdeck::{
    session::{Command, ErrorKind},
    workspace::{
        domain::{ProjectId, TaskId},
        ports::{EntityStore, Visibility},
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_soft_deletes_all_its_tasks(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Cascade").await?;
    let sibling = deck.create_project("Sibling").await?;
    for title in ["a", "b", "c"] {
        deck.create_task(project.id, title).await?;
    }
    let untouched = deck.create_task(sibling.id, "keep").await?;

    deck.run(Command::DeleteProject { id: project.id }).await?;

    let stored = deck
        .store
        .list_tasks_by_project(project.id, Visibility::IncludeDeleted)
        .await?;
    ensure!(stored.len() == 3);
    ensure!(stored.iter().all(|task| task.is_deleted()));
    ensure!(deck.tasks(project.id).await?.is_empty());

    let sibling_tasks = deck.tasks(sibling.id).await?;
    ensure!(sibling_tasks.len() == 1);
    ensure!(sibling_tasks.first().map(|task| task.id) == Some(untouched.id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_project_rejects_every_command(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Absorbing").await?;
    let task = deck.create_task(project.id, "Pending").await?;
    deck.run(Command::DeleteProject { id: project.id }).await?;

    let commands = [
        Command::ActivateProject { id: project.id },
        Command::DeleteProject { id: project.id },
        Command::GetProject { id: project.id },
        Command::CreateTask {
            title: "Late".to_owned(),
            project_id: project.id,
            description: None,
        },
        Command::CompleteTask { id: task.id },
        Command::DeleteTask { id: task.id },
        Command::GetTask { id: task.id },
    ];
    for command in commands {
        let name = command.name();
        let err = deck
            .run(command)
            .await
            .err()
            .ok_or_else(|| eyre::eyre!("{name} on a deleted project must fail"))?;
        ensure!(err.kind == ErrorKind::NotFound, "{name} returned {err}");
        ensure!(err.kind.http_status() == 404);
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_ids_stay_reserved(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Reserved").await?;
    let task = deck.create_task(project.id, "Reserved task").await?;
    deck.run(Command::DeleteProject { id: project.id }).await?;

    let stored_project = deck.store.get_project(project.id).await?;
    let stored_task = deck.store.get_task(task.id).await?;
    ensure!(stored_project.is_deleted());
    ensure!(stored_task.is_deleted());

    let replacement = deck.create_project("Reserved").await?;
    ensure!(replacement.id != project.id);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_leaves_its_project_alone(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Parent").await?;
    let task = deck.create_task(project.id, "Child").await?;

    let deleted = expect_task(deck.run(Command::DeleteTask { id: task.id }).await?)?;
    ensure!(deleted.deleted);

    let parent = expect_project(deck.run(Command::GetProject { id: project.id }).await?)?;
    ensure!(!parent.deleted);
    ensure!(parent.task_count == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_ids_are_not_found(deck: Deck) -> eyre::Result<()> {
    let commands = [
        Command::DeleteProject { id: ProjectId::new() },
        Command::DeleteTask { id: TaskId::new() },
        Command::CompleteTask { id: TaskId::new() },
    ];
    for command in commands {
        let err = deck
            .run(command)
            .await
            .err()
            .ok_or_else(|| eyre::eyre!("unknown ids must fail"))?;
        ensure!(err.kind == ErrorKind::NotFound);
    }
    Ok(())
}
