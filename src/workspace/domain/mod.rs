//! Domain model for projects and their tasks.
//!
//! Aggregates own their lifecycle transitions; the coupling rules between a
//! project and its tasks are expressed by passing the owning [`Project`] into
//! the task transitions that depend on it.

mod audit;
mod error;
mod ids;
mod limits;
mod project;
mod task;
mod text;

pub use audit::{AuditAction, AuditEntry, AuditSubject};
pub use error::{WorkspaceDomainError, WorkspaceErrorKind};
pub use ids::{ActorId, ProjectId, TaskId};
pub use limits::WorkspaceLimits;
pub use project::{Project, ProjectState, ProjectStatus};
pub use task::{Task, TaskState};
pub use text::{Description, ProjectName, TaskTitle};
