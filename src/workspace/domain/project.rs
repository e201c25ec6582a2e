//! Project aggregate root and its lifecycle types.

use super::{ActorId, Description, ProjectId, ProjectName, WorkspaceDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visible project status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Project is being planned; tasks may be queued but not completed.
    Draft,
    /// Project is in execution; tasks may be completed.
    Active,
}

impl ProjectStatus {
    /// Returns the upper-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Active => "ACTIVE",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full project lifecycle, including soft deletion.
///
/// `Deleted` is terminal and remembers the status the project had when it was
/// deleted, so a deleted project still reports a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "status", rename_all = "snake_case")]
pub enum ProjectState {
    /// Planning state; the initial state of every project.
    Draft,
    /// Execution state; never returns to draft.
    Active,
    /// Soft-deleted; hidden from default queries.
    Deleted(ProjectStatus),
}

impl ProjectState {
    /// Returns the visible status.
    #[must_use]
    pub const fn status(self) -> ProjectStatus {
        match self {
            Self::Draft => ProjectStatus::Draft,
            Self::Active => ProjectStatus::Active,
            Self::Deleted(status) => status,
        }
    }

    /// Returns `true` once the project has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    owner: ActorId,
    name: ProjectName,
    description: Option<Description>,
    state: ProjectState,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new draft project.
    #[must_use]
    pub fn new(
        owner: ActorId,
        name: ProjectName,
        description: Option<Description>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ProjectId::new(),
            owner,
            name,
            description,
            state: ProjectState::Draft,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the actor that created the project.
    #[must_use]
    pub const fn owner(&self) -> ActorId {
        self.owner
    }

    /// Returns the project name.
    #[must_use]
    pub const fn name(&self) -> &ProjectName {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the full lifecycle state.
    #[must_use]
    pub const fn state(&self) -> ProjectState {
        self.state
    }

    /// Returns the visible status.
    #[must_use]
    pub const fn status(&self) -> ProjectStatus {
        self.state.status()
    }

    /// Returns `true` once the project has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.state.is_deleted()
    }

    /// Returns `true` when tasks under this project may be completed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, ProjectState::Active)
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

    /// Returns `true` when [`Project::activate`] would succeed with the given
    /// number of live tasks.
    #[must_use]
    pub const fn can_activate(&self, live_task_count: usize) -> bool {
        matches!(self.state, ProjectState::Draft) && live_task_count > 0
    }

    /// Checks that the project has not been soft-deleted.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::ProjectDeleted`] for deleted projects.
    pub const fn ensure_live(&self) -> Result<(), WorkspaceDomainError> {
        if self.state.is_deleted() {
            return Err(WorkspaceDomainError::ProjectDeleted(self.id));
        }
        Ok(())
    }

    /// Moves the project from draft to active.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::ProjectDeleted`] for deleted projects,
    /// [`WorkspaceDomainError::ProjectAlreadyActive`] when the project is
    /// already active, or [`WorkspaceDomainError::ProjectHasNoTasks`] when
    /// `live_task_count` is zero.
    pub fn activate(
        &mut self,
        live_task_count: usize,
        clock: &impl Clock,
    ) -> Result<(), WorkspaceDomainError> {
        match self.state {
            ProjectState::Deleted(_) => Err(WorkspaceDomainError::ProjectDeleted(self.id)),
            ProjectState::Active => Err(WorkspaceDomainError::ProjectAlreadyActive(self.id)),
            ProjectState::Draft if live_task_count == 0 => {
                Err(WorkspaceDomainError::ProjectHasNoTasks(self.id))
            }
            ProjectState::Draft => {
                self.state = ProjectState::Active;
                self.touch(clock);
                Ok(())
            }
        }
    }

    /// Soft-deletes the project.
    ///
    /// Cascading to owned tasks is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceDomainError::ProjectDeleted`] when the project is
    /// already deleted.
    pub fn mark_deleted(&mut self, clock: &impl Clock) -> Result<(), WorkspaceDomainError> {
        self.ensure_live()?;
        self.state = ProjectState::Deleted(self.state.status());
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
