//! Audit trail and notifications for accepted commands.

use super::helpers::{Deck, deck};
use eyre::ensure;
use rstest::rstest;
use taskdeck::{
    session::Command,
    workspace::{
        domain::{AuditAction, AuditSubject},
        ports::EntityStore,
    },
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_commands_are_audited_with_the_session_actor(deck: Deck) -> eyre::Result<()> {
    let actor = deck
        .session
        .actor()
        .ok_or_else(|| eyre::eyre!("deck session is authenticated"))?;
    let project = deck.create_project("Audited").await?;
    let task = deck.create_task(project.id, "Traced").await?;
    deck.run(Command::ActivateProject { id: project.id }).await?;

    let trail = deck.store.audit_trail().await?;
    let actions: Vec<AuditAction> = trail.iter().map(|entry| entry.action()).collect();
    ensure!(
        actions
            == vec![
                AuditAction::CreateProject,
                AuditAction::CreateTask,
                AuditAction::ActivateProject,
            ]
    );
    ensure!(trail.iter().all(|entry| entry.actor() == actor));
    ensure!(
        trail.get(1).map(|entry| entry.subject()) == Some(AuditSubject::Task(task.id))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_and_read_only_commands_leave_no_trace(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Quiet").await?;
    let before = deck.store.audit_trail().await?.len();

    let rejected = deck.run(Command::ActivateProject { id: project.id }).await;
    ensure!(rejected.is_err());
    deck.projects().await?;
    deck.tasks(project.id).await?;
    deck.run(Command::GetProject { id: project.id }).await?;

    ensure!(deck.store.audit_trail().await?.len() == before);
    ensure!(deck.notifier.delivered().len() == before);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn notifications_describe_the_change(deck: Deck) -> eyre::Result<()> {
    let project = deck.create_project("Announce").await?;
    let task = deck.create_task(project.id, "Ship it").await?;
    deck.run(Command::ActivateProject { id: project.id }).await?;
    deck.run(Command::CompleteTask { id: task.id }).await?;

    let messages: Vec<String> = deck
        .notifier
        .delivered()
        .iter()
        .map(|notification| notification.message().to_owned())
        .collect();
    ensure!(
        messages
            == vec![
                "Project 'Announce' has been created".to_owned(),
                "Task 'Ship it' has been created".to_owned(),
                "Project 'Announce' has been activated".to_owned(),
                "Task 'Ship it' has been completed".to_owned(),
            ]
    );
    Ok(())
}
