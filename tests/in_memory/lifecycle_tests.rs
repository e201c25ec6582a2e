//! Project and task transitions exercised through the session façade.

use super::helpers::{Deck, deck, expect_project, expect_task};
use eyre::ensure;
use rstest::rstest;
use taskdeck::{
    session::{Command, ErrorKind},
    workspace::domain::ProjectStatus,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn launch_scenario_runs_end_to_end(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Launch").await?;
    ensure!(project.status == ProjectStatus::Draft);

    let task = deck.create_task(project.id, "Write copy").await?;
    ensure!(!task.completed);

    let activated = expect_project(deck.run(Command::ActivateProject { id: project.id }).await?)?;
    ensure!(activated.status == ProjectStatus::Active);
    ensure!(activated.task_count == 1);

    let completed = expect_task(deck.run(Command::CompleteTask { id: task.id }).await?)?;
    ensure!(completed.completed);

    let deleted = expect_project(deck.run(Command::DeleteProject { id: project.id }).await?)?;
    ensure!(deleted.deleted);
    ensure!(deleted.status == ProjectStatus::Active);

    ensure!(deck.projects().await?.iter().all(|view| view.id != project.id));
    ensure!(deck.tasks(project.id).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_project_activation_fails_until_a_task_exists(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Empty").await?;

    let err = deck
        .run(Command::ActivateProject { id: project.id })
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("activation without tasks must fail"))?;
    ensure!(err.kind == ErrorKind::PreconditionFailed);
    ensure!(err.kind.http_status() == 409);

    deck.create_task(project.id, "First").await?;
    let activated = expect_project(deck.run(Command::ActivateProject { id: project.id }).await?)?;
    ensure!(activated.status == ProjectStatus::Active);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completion_waits_for_activation_and_happens_once(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Gated").await?;
    let task = deck.create_task(project.id, "Queued while draft").await?;

    let err = deck
        .run(Command::CompleteTask { id: task.id })
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("completion under a draft project must fail"))?;
    ensure!(err.kind == ErrorKind::PreconditionFailed);

    deck.run(Command::ActivateProject { id: project.id }).await?;
    let completed = expect_task(deck.run(Command::CompleteTask { id: task.id }).await?)?;
    ensure!(completed.completed);

    let err = deck
        .run(Command::CompleteTask { id: task.id })
        .await
        .err()
        .ok_or_else(|| eyre::eyre!("second completion must fail"))?;
    ensure!(err.kind == ErrorKind::InvalidTransition);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_never_returns_to_draft(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Forward only").await?;
    deck.create_task(project.id, "Task").await?;
    deck.run(Command::ActivateProject { id: project.id }).await?;

    for _ in 0..3 {
        let err = deck
            .run(Command::ActivateProject { id: project.id })
            .await
            .err()
            .ok_or_else(|| eyre::eyre!("re-activation must fail"))?;
        ensure!(err.kind == ErrorKind::InvalidTransition);
        let current = expect_project(deck.run(Command::GetProject { id: project.id }).await?)?;
        ensure!(current.status == ProjectStatus::Active);
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_keeps_its_project_and_description(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Owner").await?;
    let created = expect_task(
        deck.run(Command::CreateTask {
            title: "Draft outline".to_owned(),
            project_id: project.id,
            description: Some("  first pass  ".to_owned()),
        })
        .await?,
    )?;

    let fetched = expect_task(deck.run(Command::GetTask { id: created.id }).await?)?;
    ensure!(fetched.project_id == project.id);
    ensure!(fetched.description.as_deref() == Some("first pass"));
    ensure!(fetched == created);
    Ok(())
}
