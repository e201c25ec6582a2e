//! Shared world state for project lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskdeck::{
    session::{Command, CommandOutcome, ErrorBody, Session, SessionFacade},
    workspace::{
        adapters::memory::{InMemoryEntityStore, RecordingNotifier},
        domain::{ProjectId, TaskId},
    },
};

/// Façade type used by the BDD world.
pub type TestFacade = SessionFacade<InMemoryEntityStore, RecordingNotifier, DefaultClock>;

/// Scenario world for lifecycle behaviour tests.
pub struct LifecycleWorld {
    pub facade: TestFacade,
    pub session: Session,
    pub project_id: Option<ProjectId>,
    pub task_id: Option<TaskId>,
    pub last_result: Option<Result<CommandOutcome, ErrorBody>>,
}

impl LifecycleWorld {
    /// Creates a world with an anonymous session and an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            facade: SessionFacade::new(
                Arc::new(InMemoryEntityStore::new()),
                Arc::new(RecordingNotifier::new()),
                Arc::new(DefaultClock),
            ),
            session: Session::Anonymous,
            project_id: None,
            task_id: None,
            last_result: None,
        }
    }

    /// Runs a command through the façade with the scenario session.
    pub fn execute(&self, command: Command) -> Result<CommandOutcome, ErrorBody> {
        run_async(self.facade.execute(&self.session, command))
    }

    /// Returns the project created by a previous step.
    pub fn project_id(&self) -> Result<ProjectId, eyre::Report> {
        self.project_id
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Returns the task created by a previous step.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.task_id
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
