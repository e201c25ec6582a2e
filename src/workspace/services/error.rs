//! Service-level errors shared by the lifecycle and query services.

use crate::workspace::{
    domain::{ProjectId, TaskId, WorkspaceDomainError, WorkspaceErrorKind},
    ports::StoreError,
};
use thiserror::Error;

/// Errors returned by workspace services.
#[derive(Debug, Error)]
pub enum WorkspaceServiceError {
    /// Domain validation or a lifecycle rule rejected the command.
    #[error(transparent)]
    Domain(#[from] WorkspaceDomainError),
    /// No live project exists with the given identifier.
    #[error("project {0} not found")]
    ProjectNotFound(ProjectId),
    /// No live task exists with the given identifier.
    #[error("task {0} not found")]
    TaskNotFound(TaskId),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WorkspaceServiceError {
    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> WorkspaceErrorKind {
        match self {
            Self::Domain(err) => err.kind(),
            Self::ProjectNotFound(_)
            | Self::TaskNotFound(_)
            | Self::Store(StoreError::ProjectNotFound(_) | StoreError::TaskNotFound(_)) => {
                WorkspaceErrorKind::NotFound
            }
            Self::Store(StoreError::Persistence(_)) => WorkspaceErrorKind::Internal,
        }
    }
}

/// Result type for workspace service operations.
pub type WorkspaceServiceResult<T> = Result<T, WorkspaceServiceError>;
