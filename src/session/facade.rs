//! Session façade translating commands into lifecycle and query calls.

use super::{Command, CommandOutcome, ErrorBody, ErrorKind, ProjectView, Session, TaskView};
use crate::workspace::{
    domain::{ActorId, ProjectId, WorkspaceLimits},
    ports::{EntityStore, Notifier, Visibility},
    services::{
        CreateProjectRequest, CreateTaskRequest, WorkspaceLifecycleService,
        WorkspaceQueryService, WorkspaceServiceResult,
    },
};
use mockable::Clock;
use std::sync::Arc;

/// Boundary exposed to transport handlers and user interfaces.
///
/// The façade performs no business validation: it checks that the session is
/// authenticated, dispatches the command and maps results into
/// [`CommandOutcome`] or [`ErrorBody`].
pub struct SessionFacade<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    lifecycle: WorkspaceLifecycleService<S, N, C>,
    queries: WorkspaceQueryService<S>,
}

impl<S, N, C> Clone for SessionFacade<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            lifecycle: self.lifecycle.clone(),
            queries: self.queries.clone(),
        }
    }
}

impl<S, N, C> SessionFacade<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Wires lifecycle and query services over a shared store.
    #[must_use]
    pub fn new(store: Arc<S>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            queries: WorkspaceQueryService::new(Arc::clone(&store)),
            lifecycle: WorkspaceLifecycleService::new(store, notifier, clock),
        }
    }

    /// Replaces the input limits used by the lifecycle service.
    #[must_use]
    pub fn with_limits(mut self, limits: WorkspaceLimits) -> Self {
        self.lifecycle = self.lifecycle.with_limits(limits);
        self
    }

    /// Returns the query service.
    #[must_use]
    pub const fn queries(&self) -> &WorkspaceQueryService<S> {
        &self.queries
    }

    /// Executes `command` on behalf of `session`.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorBody`] of kind [`ErrorKind::Unauthenticated`] for
    /// anonymous sessions, or the mapped service error otherwise.
    pub async fn execute(
        &self,
        session: &Session,
        command: Command,
    ) -> Result<CommandOutcome, ErrorBody> {
        let name = command.name();
        let actor = require_actor(session, name)?;

        tracing::debug!(command = name, %actor, "dispatching command");
        match self.dispatch(actor, command).await {
            Ok(outcome) => {
                tracing::debug!(command = name, %actor, "command succeeded");
                Ok(outcome)
            }
            Err(err) => {
                let body = ErrorBody::from(err);
                if body.kind == ErrorKind::Internal {
                    tracing::error!(
                        command = name,
                        %actor,
                        error = %body.message,
                        "command failed"
                    );
                } else {
                    tracing::info!(
                        command = name,
                        %actor,
                        kind = %body.kind,
                        error = %body.message,
                        "command rejected"
                    );
                }
                Err(body)
            }
        }
    }

    /// Parses a JSON request and executes it.
    ///
    /// The session is checked before the payload is parsed.
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorBody`] of kind [`ErrorKind::Unauthenticated`] for
    /// anonymous sessions, [`ErrorKind::ValidationError`] for malformed
    /// payloads, otherwise behaves like [`SessionFacade::execute`].
    pub async fn execute_json(
        &self,
        session: &Session,
        payload: &str,
    ) -> Result<CommandOutcome, ErrorBody> {
        require_actor(session, "json")?;
        let command = Command::from_json(payload)?;
        self.execute(session, command).await
    }

    async fn dispatch(
        &self,
        actor: ActorId,
        command: Command,
    ) -> WorkspaceServiceResult<CommandOutcome> {
        match command {
            Command::CreateProject { name, description } => {
                let mut request = CreateProjectRequest::new(name);
                if let Some(text) = description {
                    request = request.with_description(text);
                }
                let project = self.lifecycle.create_project(actor, request).await?;
                self.project_outcome(project.id(), Visibility::IncludeDeleted)
                    .await
            }
            Command::CreateTask {
                title,
                project_id,
                description,
            } => {
                let mut request = CreateTaskRequest::new(project_id, title);
                if let Some(text) = description {
                    request = request.with_description(text);
                }
                let task = self.lifecycle.create_task(actor, request).await?;
                Ok(CommandOutcome::Task(TaskView::from(&task)))
            }
            Command::ActivateProject { id } => {
                self.lifecycle.activate_project(actor, id).await?;
                self.project_outcome(id, Visibility::IncludeDeleted).await
            }
            Command::CompleteTask { id } => {
                let task = self.lifecycle.complete_task(actor, id).await?;
                Ok(CommandOutcome::Task(TaskView::from(&task)))
            }
            Command::DeleteProject { id } => {
                self.lifecycle.delete_project(actor, id).await?;
                self.project_outcome(id, Visibility::IncludeDeleted).await
            }
            Command::DeleteTask { id } => {
                let task = self.lifecycle.delete_task(actor, id).await?;
                Ok(CommandOutcome::Task(TaskView::from(&task)))
            }
            Command::GetProject { id } => self.project_outcome(id, Visibility::Live).await,
            Command::GetTask { id } => {
                let task = self.queries.find_task(id).await?;
                Ok(CommandOutcome::Task(TaskView::from(&task)))
            }
            Command::ListProjects => {
                let views = self
                    .queries
                    .project_overview()
                    .await?
                    .iter()
                    .map(|summary| ProjectView::from_domain(&summary.project, summary.task_count))
                    .collect();
                Ok(CommandOutcome::Projects(views))
            }
            Command::ListTasksByProject { project_id } => {
                let views = self
                    .queries
                    .tasks_for_project(project_id)
                    .await?
                    .iter()
                    .map(TaskView::from)
                    .collect();
                Ok(CommandOutcome::Tasks(views))
            }
        }
    }

    async fn project_outcome(
        &self,
        id: ProjectId,
        visibility: Visibility,
    ) -> WorkspaceServiceResult<CommandOutcome> {
        let summary = self.queries.project_summary(id, visibility).await?;
        Ok(CommandOutcome::Project(ProjectView::from_domain(
            &summary.project,
            summary.task_count,
        )))
    }
}

fn require_actor(session: &Session, command: &str) -> Result<ActorId, ErrorBody> {
    session.actor().ok_or_else(|| {
        tracing::warn!(command, "rejected command from anonymous session");
        ErrorBody::unauthenticated()
    })
}
