//! Entity store port for project and task records.

use crate::workspace::domain::{AuditEntry, Project, ProjectId, Task, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for entity store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Whether listing operations return soft-deleted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Only records that have not been soft-deleted.
    #[default]
    Live,
    /// Every record, including soft-deleted ones.
    IncludeDeleted,
}

impl Visibility {
    /// Returns `true` when a record with the given deletion flag is visible.
    #[must_use]
    pub const fn admits(self, deleted: bool) -> bool {
        match self {
            Self::Live => !deleted,
            Self::IncludeDeleted => true,
        }
    }
}

/// Batch of record writes applied atomically by [`EntityStore::commit`].
///
/// Records are upserted by id: unknown ids are appended in creation order,
/// known ids are replaced in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    audit: Vec<AuditEntry>,
}

impl ChangeSet {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a project write.
    #[must_use]
    pub fn with_project(mut self, project: Project) -> Self {
        self.projects.push(project);
        self
    }

    /// Adds a task write.
    #[must_use]
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    /// Adds several task writes.
    #[must_use]
    pub fn with_tasks(mut self, tasks: impl IntoIterator<Item = Task>) -> Self {
        self.tasks.extend(tasks);
        self
    }

    /// Appends an audit entry.
    #[must_use]
    pub fn with_audit(mut self, entry: AuditEntry) -> Self {
        self.audit.push(entry);
        self
    }

    /// Returns `true` when the change set carries no writes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.tasks.is_empty() && self.audit.is_empty()
    }

    /// Splits the change set into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Project>, Vec<Task>, Vec<AuditEntry>) {
        (self.projects, self.tasks, self.audit)
    }
}

/// A project together with its tasks, read from one consistent view of the
/// store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    /// The project record.
    pub project: Project,
    /// Tasks owned by the project in creation order.
    pub tasks: Vec<Task>,
}

/// Keyed persistence contract for projects, tasks and the audit trail.
///
/// Implementations perform no business validation.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Finds a project by identifier, including soft-deleted projects.
    async fn find_project(&self, id: ProjectId) -> StoreResult<Option<Project>>;

    /// Finds a task by identifier, including soft-deleted tasks.
    async fn find_task(&self, id: TaskId) -> StoreResult<Option<Task>>;

    /// Lists projects in creation order.
    async fn list_projects(&self, visibility: Visibility) -> StoreResult<Vec<Project>>;

    /// Lists the tasks of one project in creation order.
    async fn list_tasks_by_project(
        &self,
        project_id: ProjectId,
        visibility: Visibility,
    ) -> StoreResult<Vec<Task>>;

    /// Loads a project and its tasks in one read.
    ///
    /// Returns `None` when the project is unknown or hidden by `visibility`;
    /// `visibility` also filters the tasks.
    async fn find_project_snapshot(
        &self,
        id: ProjectId,
        visibility: Visibility,
    ) -> StoreResult<Option<ProjectSnapshot>>;

    /// Lists projects with their tasks in creation order, in one read.
    async fn list_project_snapshots(
        &self,
        visibility: Visibility,
    ) -> StoreResult<Vec<ProjectSnapshot>>;

    /// Applies every write in `changes` as one atomic batch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] when the batch cannot be applied;
    /// in that case none of it is visible.
    async fn commit(&self, changes: ChangeSet) -> StoreResult<()>;

    /// Returns the audit trail in commit order.
    async fn audit_trail(&self) -> StoreResult<Vec<AuditEntry>>;

    /// Loads a project, failing when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ProjectNotFound`] for unknown identifiers.
    async fn get_project(&self, id: ProjectId) -> StoreResult<Project> {
        self.find_project(id)
            .await?
            .ok_or(StoreError::ProjectNotFound(id))
    }

    /// Loads a task, failing when the identifier is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] for unknown identifiers.
    async fn get_task(&self, id: TaskId) -> StoreResult<Task> {
        self.find_task(id).await?.ok_or(StoreError::TaskNotFound(id))
    }

    /// Writes a single project.
    async fn put_project(&self, project: Project) -> StoreResult<()> {
        self.commit(ChangeSet::new().with_project(project)).await
    }

    /// Writes a single task.
    async fn put_task(&self, task: Task) -> StoreResult<()> {
        self.commit(ChangeSet::new().with_task(task)).await
    }
}

/// Errors returned by entity store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No project exists with the identifier.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
