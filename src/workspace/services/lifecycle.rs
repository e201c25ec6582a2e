//! Lifecycle engine: validated project and task transitions.

use crate::workspace::{
    domain::{
        ActorId, AuditAction, AuditEntry, AuditSubject, Description, Project, ProjectId,
        ProjectName, Task, TaskId, TaskTitle, WorkspaceLimits,
    },
    ports::{ChangeSet, EntityStore, Notification, Notifier, Visibility},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::{WorkspaceServiceError, WorkspaceServiceResult};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for creating a task under a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required owning project and title.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>) -> Self {
        Self {
            project_id,
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of a project deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDeletion {
    /// The project after soft deletion.
    pub project: Project,
    /// Tasks soft-deleted by the cascade, in creation order.
    pub deleted_tasks: Vec<TaskId>,
}

/// Project and task lifecycle orchestration service.
///
/// Commands are serialized through a write gate so each one reads, validates
/// and commits without interleaving with another command. Every command
/// commits a single [`ChangeSet`]; a rejected command commits nothing.
pub struct WorkspaceLifecycleService<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    notifier: Arc<N>,
    clock: Arc<C>,
    limits: WorkspaceLimits,
    write_gate: Arc<Mutex<()>>,
}

impl<S, N, C> Clone for WorkspaceLifecycleService<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            notifier: Arc::clone(&self.notifier),
            clock: Arc::clone(&self.clock),
            limits: self.limits,
            write_gate: Arc::clone(&self.write_gate),
        }
    }
}

impl<S, N, C> WorkspaceLifecycleService<S, N, C>
where
    S: EntityStore,
    N: Notifier,
    C: Clock + Send + Sync,
{
    /// Creates a lifecycle service with default input limits.
    #[must_use]
    pub fn new(store: Arc<S>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            store,
            notifier,
            clock,
            limits: WorkspaceLimits::default(),
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// Replaces the input limits.
    #[must_use]
    pub fn with_limits(mut self, limits: WorkspaceLimits) -> Self {
        self.limits = limits;
        self
    }

    async fn live_project(&self, id: ProjectId) -> WorkspaceServiceResult<Project> {
        self.store
            .find_project(id)
            .await?
            .filter(|project| !project.is_deleted())
            .ok_or(WorkspaceServiceError::ProjectNotFound(id))
    }

    async fn live_task(&self, id: TaskId) -> WorkspaceServiceResult<Task> {
        self.store
            .find_task(id)
            .await?
            .filter(|task| !task.is_deleted())
            .ok_or(WorkspaceServiceError::TaskNotFound(id))
    }

    fn audit(&self, action: AuditAction, subject: AuditSubject, actor: ActorId) -> AuditEntry {
        AuditEntry::new(action, subject, actor, &*self.clock)
    }

    /// Creates a draft project.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Domain`] when the name or description
    /// is invalid, or [`WorkspaceServiceError::Store`] when the commit fails.
    pub async fn create_project(
        &self,
        actor: ActorId,
        request: CreateProjectRequest,
    ) -> WorkspaceServiceResult<Project> {
        let CreateProjectRequest {
            name: raw_name,
            description: raw_description,
        } = request;
        let name = ProjectName::new(raw_name, &self.limits)?;
        let description = Description::parse(raw_description.as_deref(), &self.limits)?;

        let _guard = self.write_gate.lock().await;
        let project = Project::new(actor, name, description, &*self.clock);
        let entry = self.audit(
            AuditAction::CreateProject,
            AuditSubject::Project(project.id()),
            actor,
        );
        self.store
            .commit(
                ChangeSet::new()
                    .with_project(project.clone())
                    .with_audit(entry),
            )
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::CreateProject,
            format!("Project '{}' has been created", project.name()),
        ));
        Ok(project)
    }

    /// Creates a pending task under a live project.
    ///
    /// The project may still be a draft.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Domain`] when the title or description
    /// is invalid, [`WorkspaceServiceError::ProjectNotFound`] when the project
    /// is unknown or deleted, or [`WorkspaceServiceError::Store`] when the
    /// commit fails.
    pub async fn create_task(
        &self,
        actor: ActorId,
        request: CreateTaskRequest,
    ) -> WorkspaceServiceResult<Task> {
        let CreateTaskRequest {
            project_id,
            title: raw_title,
            description: raw_description,
        } = request;
        let title = TaskTitle::new(raw_title, &self.limits)?;
        let description = Description::parse(raw_description.as_deref(), &self.limits)?;

        let _guard = self.write_gate.lock().await;
        let project = self.live_project(project_id).await?;
        let task = Task::new(&project, title, description, &*self.clock)?;
        let entry = self.audit(AuditAction::CreateTask, AuditSubject::Task(task.id()), actor);
        self.store
            .commit(ChangeSet::new().with_task(task.clone()).with_audit(entry))
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::CreateTask,
            format!("Task '{}' has been created", task.title()),
        ));
        Ok(task)
    }

    /// Moves a draft project with at least one live task to active.
    ///
    /// Activation is not idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::ProjectNotFound`] when the project is
    /// unknown or deleted, a domain error when the project is already active
    /// or has no live tasks, or [`WorkspaceServiceError::Store`].
    pub async fn activate_project(
        &self,
        actor: ActorId,
        project_id: ProjectId,
    ) -> WorkspaceServiceResult<Project> {
        let _guard = self.write_gate.lock().await;
        let mut project = self.live_project(project_id).await?;
        let live_tasks = self
            .store
            .list_tasks_by_project(project_id, Visibility::Live)
            .await?
            .len();
        project.activate(live_tasks, &*self.clock)?;
        let entry = self.audit(
            AuditAction::ActivateProject,
            AuditSubject::Project(project_id),
            actor,
        );
        self.store
            .commit(
                ChangeSet::new()
                    .with_project(project.clone())
                    .with_audit(entry),
            )
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::ActivateProject,
            format!("Project '{}' has been activated", project.name()),
        ));
        Ok(project)
    }

    /// Completes a pending task whose project is active.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::TaskNotFound`] when the task is unknown
    /// or deleted, [`WorkspaceServiceError::ProjectNotFound`] when its project
    /// record is missing, a domain error when the project is not active or the
    /// task is already completed, or [`WorkspaceServiceError::Store`].
    pub async fn complete_task(
        &self,
        actor: ActorId,
        task_id: TaskId,
    ) -> WorkspaceServiceResult<Task> {
        let _guard = self.write_gate.lock().await;
        let mut task = self.live_task(task_id).await?;
        let project_id = task.project_id();
        let project = self
            .store
            .find_project(project_id)
            .await?
            .ok_or(WorkspaceServiceError::ProjectNotFound(project_id))?;
        task.complete(&project, &*self.clock)?;
        let entry = self.audit(AuditAction::CompleteTask, AuditSubject::Task(task_id), actor);
        self.store
            .commit(ChangeSet::new().with_task(task.clone()).with_audit(entry))
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::CompleteTask,
            format!("Task '{}' has been completed", task.title()),
        ));
        Ok(task)
    }

    /// Soft-deletes a project and every live task it owns in one commit.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::ProjectNotFound`] when the project is
    /// unknown or already deleted, or [`WorkspaceServiceError::Store`].
    pub async fn delete_project(
        &self,
        actor: ActorId,
        project_id: ProjectId,
    ) -> WorkspaceServiceResult<ProjectDeletion> {
        let _guard = self.write_gate.lock().await;
        let mut project = self.live_project(project_id).await?;
        let mut tasks = self
            .store
            .list_tasks_by_project(project_id, Visibility::Live)
            .await?;

        project.mark_deleted(&*self.clock)?;
        for task in &mut tasks {
            task.mark_deleted(&*self.clock)?;
        }
        let deleted_tasks = tasks.iter().map(Task::id).collect();
        let entry = self.audit(
            AuditAction::DeleteProject,
            AuditSubject::Project(project_id),
            actor,
        );
        self.store
            .commit(
                ChangeSet::new()
                    .with_project(project.clone())
                    .with_tasks(tasks)
                    .with_audit(entry),
            )
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::DeleteProject,
            format!("Project '{}' has been deleted", project.name()),
        ));
        Ok(ProjectDeletion {
            project,
            deleted_tasks,
        })
    }

    /// Soft-deletes a single task. Completed tasks stay completed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::TaskNotFound`] when the task is unknown
    /// or already deleted, or [`WorkspaceServiceError::Store`].
    pub async fn delete_task(
        &self,
        actor: ActorId,
        task_id: TaskId,
    ) -> WorkspaceServiceResult<Task> {
        let _guard = self.write_gate.lock().await;
        let mut task = self.live_task(task_id).await?;
        task.mark_deleted(&*self.clock)?;
        let entry = self.audit(AuditAction::DeleteTask, AuditSubject::Task(task_id), actor);
        self.store
            .commit(ChangeSet::new().with_task(task.clone()).with_audit(entry))
            .await?;

        self.notifier.notify(&Notification::new(
            AuditAction::DeleteTask,
            format!("Task '{}' has been deleted", task.title()),
        ));
        Ok(task)
    }
}
