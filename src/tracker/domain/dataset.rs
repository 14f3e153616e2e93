//! The persisted unit: every project and task plus identifier counters.

use super::{DomainError, Project, ProjectId, ProjectName, Task, TaskDescription, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full collection of projects and tasks, loaded and saved as one unit.
///
/// Identifiers are allocated from persisted high-water marks so that a
/// deleted task's identifier is never handed out again. Datasets written
/// without the counters fall back to the highest identifier in use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    projects: Vec<Project>,
    tasks: Vec<Task>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_project_id: Option<ProjectId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_task_id: Option<TaskId>,
}

impl Dataset {
    /// Creates an empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dataset from existing records without stored counters.
    #[must_use]
    pub const fn from_records(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self {
            projects,
            tasks,
            next_project_id: None,
            next_task_id: None,
        }
    }

    /// Returns all projects in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns all tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Checks that identifiers are unique within each collection.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateProjectId`] or
    /// [`DomainError::DuplicateTaskId`] for the first repeated identifier.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut project_ids = HashSet::with_capacity(self.projects.len());
        for project in &self.projects {
            if !project_ids.insert(project.id()) {
                return Err(DomainError::DuplicateProjectId(project.id().value()));
            }
        }

        let mut task_ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task_ids.insert(task.id()) {
                return Err(DomainError::DuplicateTaskId(task.id().value()));
            }
        }
        Ok(())
    }

    /// Returns the project with the given identifier.
    #[must_use]
    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id() == id)
    }

    /// Returns whether a project with the given identifier exists.
    #[must_use]
    pub fn contains_project(&self, id: ProjectId) -> bool {
        self.project(id).is_some()
    }

    /// Appends a project under the next free identifier and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProjectIdsExhausted`] when no identifier is
    /// left to assign. The dataset is unchanged in that case.
    pub fn add_project(&mut self, name: ProjectName) -> Result<Project, DomainError> {
        let id = self.peek_project_id()?;
        let project = Project::new(id, name);
        self.projects.push(project.clone());
        self.next_project_id = id.next();
        Ok(project)
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns a mutable reference to the task with the given identifier.
    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == id)
    }

    /// Appends a `todo` task under the next free identifier and returns it.
    ///
    /// The caller is responsible for checking that the project exists.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskIdsExhausted`] when no identifier is left
    /// to assign. The dataset is unchanged in that case.
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        description: TaskDescription,
        clock: &impl Clock,
    ) -> Result<Task, DomainError> {
        let id = self.peek_task_id()?;
        let task = Task::new(id, project_id, description, clock);
        self.tasks.push(task.clone());
        self.next_task_id = id.next();
        Ok(task)
    }

    /// Removes the task with the given identifier, keeping the order of the
    /// remaining tasks.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Returns the identifier the next added project will receive.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ProjectIdsExhausted`] when the highest project
    /// identifier in use is `u64::MAX`.
    pub fn peek_project_id(&self) -> Result<ProjectId, DomainError> {
        let after_highest = self
            .projects
            .iter()
            .map(Project::id)
            .max()
            .map_or(Some(ProjectId::FIRST), ProjectId::next)
            .ok_or(DomainError::ProjectIdsExhausted)?;
        Ok(self
            .next_project_id
            .map_or(after_highest, |stored| stored.max(after_highest)))
    }

    /// Returns the identifier the next added task will receive.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TaskIdsExhausted`] when the highest task
    /// identifier in use is `u64::MAX`.
    pub fn peek_task_id(&self) -> Result<TaskId, DomainError> {
        let after_highest = self
            .tasks
            .iter()
            .map(Task::id)
            .max()
            .map_or(Some(TaskId::FIRST), TaskId::next)
            .ok_or(DomainError::TaskIdsExhausted)?;
        Ok(self
            .next_task_id
            .map_or(after_highest, |stored| stored.max(after_highest)))
    }
}
