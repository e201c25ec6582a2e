//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::{
    session::{Command, CommandOutcome, ErrorBody, ProjectView, Session, SessionFacade, TaskView},
    workspace::{
        adapters::memory::{InMemoryEntityStore, RecordingNotifier},
        domain::{ActorId, ProjectId},
    },
};

/// Façade type used by the integration tests.
pub type TestFacade = SessionFacade<InMemoryEntityStore, RecordingNotifier, DefaultClock>;

/// Façade together with handles to its adapters.
pub struct Deck {
    pub facade: TestFacade,
    pub store: Arc<InMemoryEntityStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub session: Session,
}

/// Provides a fresh façade over empty in-memory adapters.
#[fixture]
pub fn deck() -> Deck {
    let store = Arc::new(InMemoryEntityStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    Deck {
        facade: SessionFacade::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        ),
        store,
        notifier,
        session: Session::authenticated(ActorId::new()),
    }
}

impl Deck {
    /// Runs a command with the deck's session.
    pub async fn run(&self, command: Command) -> Result<CommandOutcome, ErrorBody> {
        self.facade.execute(&self.session, command).await
    }

    /// Creates a project and returns its view.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or yields another outcome.
    pub async fn create_project(&self, name: &str) -> eyre::Result<ProjectView> {
        let outcome = self
            .run(Command::CreateProject {
                name: name.to_owned(),
                description: None,
            })
            .await?;
        expect_project(outcome)
    }

    /// Creates a task and returns its view.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or yields another outcome.
    pub async fn create_task(&self, project_id: ProjectId, title: &str) -> eyre::Result<TaskView> {
        let outcome = self
            .run(Command::CreateTask {
                title: title.to_owned(),
                project_id,
                description: None,
            })
            .await?;
        expect_task(outcome)
    }

    /// Lists live projects.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or yields another outcome.
    pub async fn projects(&self) -> eyre::Result<Vec<ProjectView>> {
        match self.run(Command::ListProjects).await? {
            CommandOutcome::Projects(views) => Ok(views),
            other => Err(eyre::eyre!("expected project list, got {other:?}")),
        }
    }

    /// Lists the live tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails or yields another outcome.
    pub async fn tasks(&self, project_id: ProjectId) -> eyre::Result<Vec<TaskView>> {
        match self.run(Command::ListTasksByProject { project_id }).await? {
            CommandOutcome::Tasks(views) => Ok(views),
            other => Err(eyre::eyre!("expected task list, got {other:?}")),
        }
    }
}

/// Extracts a project view from an outcome.
///
/// # Errors
///
/// Returns an error for any other outcome.
pub fn expect_project(outcome: CommandOutcome) -> eyre::Result<ProjectView> {
    match outcome {
        CommandOutcome::Project(view) => Ok(view),
        other => Err(eyre::eyre!("expected project, got {other:?}")),
    }
}

/// Extracts a task view from an outcome.
///
/// # Errors
///
/// Returns an error for any other outcome.
pub fn expect_task(outcome: CommandOutcome) -> eyre::Result<TaskView> {
    match outcome {
        CommandOutcome::Task(view) => Ok(view),
        other => Err(eyre::eyre!("expected task, got {other:?}")),
    }
}
