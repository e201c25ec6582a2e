//! Query and aggregation layer: derived views recomputed on every read.

use crate::workspace::{
    domain::{Project, ProjectId, Task, TaskId},
    ports::{EntityStore, ProjectSnapshot, Visibility},
};
use std::sync::Arc;

use super::error::{WorkspaceServiceError, WorkspaceServiceResult};

/// Returns `true` when `project` is a draft with at least one live task.
#[must_use]
pub const fn can_activate(project: &Project, live_task_count: usize) -> bool {
    project.can_activate(live_task_count)
}

/// Returns `true` when `task` is pending and `project` is active.
#[must_use]
pub const fn can_complete(task: &Task, project: &Project) -> bool {
    task.can_complete(project)
}

/// Live project together with its derived counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSummary {
    /// The project record.
    pub project: Project,
    /// Number of live tasks.
    pub task_count: usize,
    /// Number of live tasks already completed.
    pub completed_count: usize,
    /// Whether the project may be activated now.
    pub can_activate: bool,
}

impl ProjectSummary {
    fn from_snapshot(snapshot: ProjectSnapshot) -> Self {
        let ProjectSnapshot { project, tasks } = snapshot;
        let live = tasks.iter().filter(|task| !task.is_deleted());
        let task_count = live.clone().count();
        let completed_count = live.filter(|task| task.is_completed()).count();
        Self {
            can_activate: can_activate(&project, task_count),
            project,
            task_count,
            completed_count,
        }
    }
}

/// Live task together with its derived predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSummary {
    /// The task record.
    pub task: Task,
    /// Whether the task may be completed now.
    pub can_complete: bool,
}

/// Read-side service over the entity store.
pub struct WorkspaceQueryService<S>
where
    S: EntityStore,
{
    store: Arc<S>,
}

impl<S> Clone for WorkspaceQueryService<S>
where
    S: EntityStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> WorkspaceQueryService<S>
where
    S: EntityStore,
{
    /// Creates a query service over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists live projects in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Store`] when the store read fails.
    pub async fn list_projects(&self) -> WorkspaceServiceResult<Vec<Project>> {
        Ok(self.store.list_projects(Visibility::Live).await?)
    }

    /// Loads a live project.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::ProjectNotFound`] for unknown or
    /// deleted projects.
    pub async fn find_project(&self, id: ProjectId) -> WorkspaceServiceResult<Project> {
        self.store
            .find_project(id)
            .await?
            .filter(|project| !project.is_deleted())
            .ok_or(WorkspaceServiceError::ProjectNotFound(id))
    }

    /// Loads a live task.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::TaskNotFound`] for unknown or deleted
    /// tasks.
    pub async fn find_task(&self, id: TaskId) -> WorkspaceServiceResult<Task> {
        self.store
            .find_task(id)
            .await?
            .filter(|task| !task.is_deleted())
            .ok_or(WorkspaceServiceError::TaskNotFound(id))
    }

    /// Lists the live tasks of a project in creation order.
    ///
    /// Unknown or deleted projects yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Store`] when the store read fails.
    pub async fn tasks_for_project(
        &self,
        project_id: ProjectId,
    ) -> WorkspaceServiceResult<Vec<Task>> {
        Ok(self
            .store
            .list_tasks_by_project(project_id, Visibility::Live)
            .await?)
    }

    /// Counts the live tasks of a project.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Store`] when the store read fails.
    pub async fn task_count(&self, project_id: ProjectId) -> WorkspaceServiceResult<usize> {
        Ok(self.tasks_for_project(project_id).await?.len())
    }

    /// Summarizes one project from a single store snapshot.
    ///
    /// With [`Visibility::IncludeDeleted`] a deleted project is summarized
    /// too; counters always cover live tasks only.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::ProjectNotFound`] when the project is
    /// unknown or hidden by `visibility`.
    pub async fn project_summary(
        &self,
        id: ProjectId,
        visibility: Visibility,
    ) -> WorkspaceServiceResult<ProjectSummary> {
        self.store
            .find_project_snapshot(id, visibility)
            .await?
            .map(ProjectSummary::from_snapshot)
            .ok_or(WorkspaceServiceError::ProjectNotFound(id))
    }

    /// Summarizes every live project from a single store snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::Store`] when the store read fails.
    pub async fn project_overview(&self) -> WorkspaceServiceResult<Vec<ProjectSummary>> {
        let snapshots = self.store.list_project_snapshots(Visibility::Live).await?;
        Ok(snapshots
            .into_iter()
            .map(ProjectSummary::from_snapshot)
            .collect())
    }

    /// Lists the live tasks of a live project with their completion
    /// predicate.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceServiceError::ProjectNotFound`] for unknown or
    /// deleted projects.
    pub async fn task_board(
        &self,
        project_id: ProjectId,
    ) -> WorkspaceServiceResult<Vec<TaskSummary>> {
        let ProjectSnapshot { project, tasks } = self
            .store
            .find_project_snapshot(project_id, Visibility::Live)
            .await?
            .ok_or(WorkspaceServiceError::ProjectNotFound(project_id))?;
        Ok(tasks
            .into_iter()
            .map(|task| TaskSummary {
                can_complete: can_complete(&task, &project),
                task,
            })
            .collect())
    }
}
