//! Application services for the project and task lifecycle.

mod error;
mod lifecycle;
mod query;

pub use error::{WorkspaceServiceError, WorkspaceServiceResult};
pub use lifecycle::{
    CreateProjectRequest, CreateTaskRequest, ProjectDeletion, WorkspaceLifecycleService,
};
pub use query::{ProjectSummary, TaskSummary, WorkspaceQueryService, can_activate, can_complete};
