//! In-memory entity store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::workspace::{
    domain::{AuditEntry, Project, ProjectId, Task, TaskId},
    ports::{ChangeSet, EntityStore, ProjectSnapshot, StoreError, StoreResult, Visibility},
};

/// Thread-safe in-memory entity store.
///
/// Records are never removed, so identifiers stay reserved after soft
/// deletion.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    projects: HashMap<ProjectId, Project>,
    project_order: Vec<ProjectId>,
    tasks: HashMap<TaskId, Task>,
    project_tasks: HashMap<ProjectId, Vec<TaskId>>,
    audit: Vec<AuditEntry>,
}

impl InMemoryStoreState {
    fn upsert_project(&mut self, project: Project) {
        match self.projects.entry(project.id()) {
            Entry::Occupied(mut slot) => {
                slot.insert(project);
            }
            Entry::Vacant(slot) => {
                self.project_order.push(project.id());
                slot.insert(project);
            }
        }
    }

    fn upsert_task(&mut self, task: Task) {
        match self.tasks.entry(task.id()) {
            Entry::Occupied(mut slot) => {
                slot.insert(task);
            }
            Entry::Vacant(slot) => {
                self.project_tasks
                    .entry(task.project_id())
                    .or_default()
                    .push(task.id());
                slot.insert(task);
            }
        }
    }

    fn tasks_of(&self, project_id: ProjectId, visibility: Visibility) -> Vec<Task> {
        self.project_tasks
            .get(&project_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| self.tasks.get(id))
                    .filter(|task| visibility.admits(task.is_deleted()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn snapshot(&self, project: &Project, visibility: Visibility) -> ProjectSnapshot {
        ProjectSnapshot {
            project: project.clone(),
            tasks: self.tasks_of(project.id(), visibility),
        }
    }
}

impl InMemoryEntityStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, InMemoryStoreState>> {
        self.state
            .read()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| StoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl EntityStore for InMemoryEntityStore {
    async fn find_project(&self, id: ProjectId) -> StoreResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn find_task(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list_projects(&self, visibility: Visibility) -> StoreResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state
            .project_order
            .iter()
            .filter_map(|id| state.projects.get(id))
            .filter(|project| visibility.admits(project.is_deleted()))
            .cloned()
            .collect())
    }

    async fn list_tasks_by_project(
        &self,
        project_id: ProjectId,
        visibility: Visibility,
    ) -> StoreResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks_of(project_id, visibility))
    }

    async fn find_project_snapshot(
        &self,
        id: ProjectId,
        visibility: Visibility,
    ) -> StoreResult<Option<ProjectSnapshot>> {
        let state = self.read()?;
        Ok(state
            .projects
            .get(&id)
            .filter(|project| visibility.admits(project.is_deleted()))
            .map(|project| state.snapshot(project, visibility)))
    }

    async fn list_project_snapshots(
        &self,
        visibility: Visibility,
    ) -> StoreResult<Vec<ProjectSnapshot>> {
        let state = self.read()?;
        Ok(state
            .project_order
            .iter()
            .filter_map(|id| state.projects.get(id))
            .filter(|project| visibility.admits(project.is_deleted()))
            .map(|project| state.snapshot(project, visibility))
            .collect())
    }

    async fn commit(&self, changes: ChangeSet) -> StoreResult<()> {
        if changes.is_empty() {
            return Ok(());
        }
        let (projects, tasks, audit) = changes.into_parts();
        let mut state = self.write()?;
        for project in projects {
            state.upsert_project(project);
        }
        for task in tasks {
            state.upsert_task(task);
        }
        state.audit.extend(audit);
        Ok(())
    }

    async fn audit_trail(&self) -> StoreResult<Vec<AuditEntry>> {
        let state = self.read()?;
        Ok(state.audit.clone())
    }
}
