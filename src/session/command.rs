//! Inbound commands and outbound records of the session boundary.

use super::ErrorBody;
use crate::workspace::domain::{ActorId, Project, ProjectId, ProjectStatus, Task, TaskId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Structured request accepted by [`super::SessionFacade::execute`].
///
/// Serialized externally tagged, e.g.
/// `{"createTask": {"title": "Write copy", "projectId": "…"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    /// Create a draft project.
    CreateProject {
        /// Project name.
        name: String,
        /// Optional description.
        description: Option<String>,
    },
    /// Create a pending task under a project.
    CreateTask {
        /// Task title.
        title: String,
        /// Owning project.
        project_id: ProjectId,
        /// Optional description.
        description: Option<String>,
    },
    /// Move a draft project to active.
    ActivateProject {
        /// Target project.
        id: ProjectId,
    },
    /// Complete a pending task.
    CompleteTask {
        /// Target task.
        id: TaskId,
    },
    /// Soft-delete a project and its tasks.
    DeleteProject {
        /// Target project.
        id: ProjectId,
    },
    /// Soft-delete a task.
    DeleteTask {
        /// Target task.
        id: TaskId,
    },
    /// Read one live project.
    GetProject {
        /// Target project.
        id: ProjectId,
    },
    /// Read one live task.
    GetTask {
        /// Target task.
        id: TaskId,
    },
    /// List live projects.
    ListProjects,
    /// List the live tasks of a project.
    ListTasksByProject {
        /// Owning project.
        project_id: ProjectId,
    },
}

impl Command {
    /// Parses a JSON request.
    ///
    /// Commands without arguments accept a bare name (`"listProjects"`), a
    /// `null` body or an empty object body (`{"listProjects": {}}`).
    ///
    /// # Errors
    ///
    /// Returns an [`ErrorBody`] of kind
    /// [`super::ErrorKind::ValidationError`] when the payload is malformed.
    pub fn from_json(payload: &str) -> Result<Self, ErrorBody> {
        let value: Value = serde_json::from_str(payload)?;
        let bare = empty_body_command(&value).map(str::to_owned);
        Ok(serde_json::from_value(bare.map_or(value, Value::String))?)
    }

    /// Returns the wire name of the command.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateProject { .. } => "createProject",
            Self::CreateTask { .. } => "createTask",
            Self::ActivateProject { .. } => "activateProject",
            Self::CompleteTask { .. } => "completeTask",
            Self::DeleteProject { .. } => "deleteProject",
            Self::DeleteTask { .. } => "deleteTask",
            Self::GetProject { .. } => "getProject",
            Self::GetTask { .. } => "getTask",
            Self::ListProjects => "listProjects",
            Self::ListTasksByProject { .. } => "listTasksByProject",
        }
    }

    /// Returns `true` for commands that never mutate state.
    #[must_use]
    pub const fn is_query(&self) -> bool {
        matches!(
            self,
            Self::GetProject { .. }
                | Self::GetTask { .. }
                | Self::ListProjects
                | Self::ListTasksByProject { .. }
        )
    }
}

/// Returns the command name when `value` is `{"<name>": {}}` for a command
/// without arguments.
fn empty_body_command(value: &Value) -> Option<&str> {
    let object = value.as_object().filter(|object| object.len() == 1)?;
    let (name, body) = object.iter().next()?;
    let unit = name == Command::ListProjects.name();
    (unit && body.as_object().is_some_and(Map::is_empty)).then_some(name.as_str())
}

/// Flat project record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    /// Project identifier.
    pub id: ProjectId,
    /// Actor that created the project.
    pub owner_id: ActorId,
    /// Project name.
    pub name: String,
    /// Project description, if any.
    pub description: Option<String>,
    /// Visible status.
    pub status: ProjectStatus,
    /// Soft-deletion flag.
    pub deleted: bool,
    /// Number of live tasks.
    pub task_count: usize,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl ProjectView {
    /// Builds the view of `project` with its live task count.
    #[must_use]
    pub fn from_domain(project: &Project, task_count: usize) -> Self {
        Self {
            id: project.id(),
            owner_id: project.owner(),
            name: project.name().as_str().to_owned(),
            description: project.description().map(|d| d.as_str().to_owned()),
            status: project.status(),
            deleted: project.is_deleted(),
            task_count,
            created_at: project.created_at(),
            updated_at: project.updated_at(),
        }
    }
}

/// Flat task record returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Task title.
    pub title: String,
    /// Task description, if any.
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Soft-deletion flag.
    pub deleted: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest lifecycle timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            project_id: task.project_id(),
            title: task.title().as_str().to_owned(),
            description: task.description().map(|d| d.as_str().to_owned()),
            completed: task.is_completed(),
            deleted: task.is_deleted(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

/// Successful result of a façade call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandOutcome {
    /// A single project.
    Project(ProjectView),
    /// A single task.
    Task(TaskView),
    /// Several projects.
    Projects(Vec<ProjectView>),
    /// Several tasks.
    Tasks(Vec<TaskView>),
}
