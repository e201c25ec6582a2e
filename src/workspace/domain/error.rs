//! Error types for workspace domain validation and lifecycle transitions.

use super::{ProjectId, ProjectStatus, TaskId};
use thiserror::Error;

/// Coarse classification shared by every error the workspace surfaces.
///
/// Callers map kinds onto their own transport conventions; see
/// [`crate::session::ErrorKind`] for the HTTP binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkspaceErrorKind {
    /// Malformed input such as an empty name.
    Validation,
    /// Unknown or soft-deleted identifier.
    NotFound,
    /// Current state does not satisfy a precondition of the command.
    PreconditionFailed,
    /// The entity is already in, or past, the requested state.
    InvalidTransition,
    /// Storage failure unrelated to the request itself.
    Internal,
}

/// Errors returned while constructing or transitioning workspace aggregates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkspaceDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The project name exceeds the configured character limit.
    #[error("project name cannot exceed {max} characters")]
    ProjectNameTooLong {
        /// Configured limit in characters.
        max: usize,
    },

    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The task title exceeds the configured character limit.
    #[error("task title cannot exceed {max} characters")]
    TaskTitleTooLong {
        /// Configured limit in characters.
        max: usize,
    },

    /// A description exceeds the configured character limit.
    #[error("description cannot exceed {max} characters")]
    DescriptionTooLong {
        /// Configured limit in characters.
        max: usize,
    },

    /// The project has been soft-deleted.
    #[error("project {0} not found")]
    ProjectDeleted(ProjectId),

    /// The task has been soft-deleted.
    #[error("task {0} not found")]
    TaskDeleted(TaskId),

    /// Activation requires at least one live task.
    #[error("project {0} must have at least one task to be activated")]
    ProjectHasNoTasks(ProjectId),

    /// Task completion requires the owning project to be active.
    #[error(
        "task {task_id} can only be completed while project {project_id} is active (current status: {status})"
    )]
    ProjectNotActive {
        /// Task that was asked to complete.
        task_id: TaskId,
        /// Owning project.
        project_id: ProjectId,
        /// Current project status.
        status: ProjectStatus,
    },

    /// The project is already active.
    #[error("project {0} is already active")]
    ProjectAlreadyActive(ProjectId),

    /// The task is already completed.
    #[error("task {0} is already completed")]
    TaskAlreadyCompleted(TaskId),
}

impl WorkspaceDomainError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> WorkspaceErrorKind {
        match self {
            Self::EmptyProjectName
            | Self::ProjectNameTooLong { .. }
            | Self::EmptyTaskTitle
            | Self::TaskTitleTooLong { .. }
            | Self::DescriptionTooLong { .. } => WorkspaceErrorKind::Validation,
            Self::ProjectDeleted(_) | Self::TaskDeleted(_) => WorkspaceErrorKind::NotFound,
            Self::ProjectHasNoTasks(_) | Self::ProjectNotActive { .. } => {
                WorkspaceErrorKind::PreconditionFailed
            }
            Self::ProjectAlreadyActive(_) | Self::TaskAlreadyCompleted(_) => {
                WorkspaceErrorKind::InvalidTransition
            }
        }
    }
}
