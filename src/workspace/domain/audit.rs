//! Audit trail records for accepted workspace commands.

use super::{ActorId, ProjectId, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Command that produced an audit entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// A project was created.
    CreateProject,
    /// A task was created.
    CreateTask,
    /// A project moved from draft to active.
    ActivateProject,
    /// A task was completed.
    CompleteTask,
    /// A project and its tasks were soft-deleted.
    DeleteProject,
    /// A task was soft-deleted.
    DeleteTask,
}

impl AuditAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateProject => "CREATE_PROJECT",
            Self::CreateTask => "CREATE_TASK",
            Self::ActivateProject => "ACTIVATE_PROJECT",
            Self::CompleteTask => "COMPLETE_TASK",
            Self::DeleteProject => "DELETE_PROJECT",
            Self::DeleteTask => "DELETE_TASK",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity affected by an audited command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum AuditSubject {
    /// A project.
    Project(ProjectId),
    /// A task.
    Task(TaskId),
}

/// Immutable record of one accepted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    action: AuditAction,
    subject: AuditSubject,
    actor: ActorId,
    recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Records `action` against `subject` at the current clock time.
    #[must_use]
    pub fn new(
        action: AuditAction,
        subject: AuditSubject,
        actor: ActorId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            action,
            subject,
            actor,
            recorded_at: clock.utc(),
        }
    }

    /// Returns the audited action.
    #[must_use]
    pub const fn action(&self) -> AuditAction {
        self.action
    }

    /// Returns the affected entity.
    #[must_use]
    pub const fn subject(&self) -> AuditSubject {
        self.subject
    }

    /// Returns the actor that issued the command.
    #[must_use]
    pub const fn actor(&self) -> ActorId {
        self.actor
    }

    /// Returns when the entry was recorded.
    #[must_use]
    pub const fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
