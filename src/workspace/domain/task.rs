//! Task aggregate and its lifecycle types.

use super::{Description, Project, ProjectId, TaskId, TaskTitle, WorkspaceDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// Completion is one-way; deletion is terminal and keeps the completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TaskState {
    /// Task is queued and not yet done.
    Pending,
    /// Task is done.
    Completed,
    /// Task has been soft-deleted.
    Deleted {
        /// Whether the task was completed before deletion.
        completed: bool,
    },
}

impl TaskState {
    /// Returns `true` when the task was completed, deleted or not.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed | Self::Deleted { completed: true })
    }

    /// Returns `true` once the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Task aggregate, owned by exactly one project for its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    title: TaskTitle,
    description: Option<Description>,
    state: TaskState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task under `project`.
    ///
    /// The project does not need to be active; tasks may be queued while it
    /// is still a draft.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::ProjectDeleted`] when the project has
    /// been soft-deleted.
    pub fn new(
        project: &Project,
        title: TaskTitle,
        description: Option<Description>,
        clock: &impl Clock,
    ) -> Result<Self, WorkspaceDomainError> {
        project.ensure_live()?;
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            project_id: project.id(),
            title,
            description,
            state: TaskState::Pending,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns `true` once the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.state.is_completed()
    }

    /// Returns `true` once the task has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when [`Task::complete`] would succeed under `project`.
    #[must_use]
    pub const fn can_complete(&self, project: &Project) -> bool {
        project.is_active() && matches!(self.state, TaskState::Pending)
    }

    /// Marks the task completed.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::TaskDeleted`] for deleted tasks,
    /// [`WorkspaceDomainError::ProjectDeleted`] when the owning project is
    /// deleted, [`WorkspaceDomainError::ProjectNotActive`] when the project is
    /// still a draft, or [`WorkspaceDomainError::TaskAlreadyCompleted`].
    pub fn complete(
        &mut self,
        project: &Project,
        clock: &impl Clock,
    ) -> Result<(), WorkspaceDomainError> {
        if self.state.is_deleted() {
            return Err(WorkspaceDomainError::TaskDeleted(self.id));
        }
        project.ensure_live()?;
        if !project.is_active() {
            return Err(WorkspaceDomainError::ProjectNotActive {
                task_id: self.id,
                project_id: project.id(),
                status: project.status(),
            });
        }
        if self.state.is_completed() {
            return Err(WorkspaceDomainError::TaskAlreadyCompleted(self.id));
        }
        self.state = TaskState::Completed;
        self.touch(clock);
        Ok(())
    }

    /// Soft-deletes the task, preserving its completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::TaskDeleted`] when the task is already
    /// deleted.
    pub fn mark_deleted(&mut self, clock: &impl Clock) -> Result<(), WorkspaceDomainError> {
        if self.state.is_deleted() {
            return Err(WorkspaceDomainError::TaskDeleted(self.id));
        }
        self.state = TaskState::Deleted {
            completed: self.state.is_completed(),
        };
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
