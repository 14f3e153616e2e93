//! Repository over the task collection.

use mockable::Clock;
use std::sync::Arc;
use tracing::info;

use super::{ProjectRepository, TrackerError, TrackerResult};
use crate::tracker::{
    domain::{ProjectId, Task, TaskDescription, TaskId, TaskStatus},
    ports::DatasetStore,
};

/// Selection criteria for [`TaskRepository::list_tasks`].
///
/// Supplied fields combine with AND semantics; an empty filter matches
/// every task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    project_id: Option<ProjectId>,
    status: Option<TaskStatus>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            project_id: None,
            status: None,
        }
    }

    /// Restricts the filter to tasks of `project_id`.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Restricts the filter to tasks in `status`.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to tasks whose status is spelled `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidInput`] when `status` is not one of
    /// `todo`, `in-progress` or `done`.
    pub fn with_status_str(self, status: &str) -> TrackerResult<Self> {
        Ok(self.with_status(TaskStatus::try_from(status)?))
    }

    /// Returns the project restriction, if any.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the status restriction, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns whether `task` satisfies every supplied field.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.project_id.is_none_or(|id| task.project_id() == id)
            && self.status.is_none_or(|status| task.status() == status)
    }
}

/// Creates, mutates, deletes and enumerates tasks.
///
/// Project references are validated through a [`ProjectRepository`] over
/// the same store. Every call reloads the dataset; nothing is cached.
pub struct TaskRepository<S, C>
where
    S: DatasetStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    projects: ProjectRepository<S>,
    clock: Arc<C>,
}

impl<S, C> Clone for TaskRepository<S, C>
where
    S: DatasetStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            projects: self.projects.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S, C> TaskRepository<S, C>
where
    S: DatasetStore,
    C: Clock + Send + Sync,
{
    /// Creates a task repository over `store`, stamping times from `clock`.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        let projects = ProjectRepository::new(Arc::clone(&store));
        Self {
            store,
            projects,
            clock,
        }
    }

    /// Files a new `todo` task under `project_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when the project does not
    /// exist, [`TrackerError::InvalidInput`] when the description is empty
    /// after trimming or no task identifier is left to assign, or a store
    /// error. Nothing is written on failure.
    pub fn add_task(&self, project_id: ProjectId, description: &str) -> TrackerResult<Task> {
        if !self.projects.project_exists(project_id)? {
            return Err(TrackerError::ProjectNotFound(project_id));
        }
        let task_description = TaskDescription::new(description)?;

        let mut dataset = self.store.load()?;
        let task = dataset.add_task(project_id, task_description, &*self.clock)?;
        self.store.save(&dataset)?;
        info!(task_id = %task.id(), project_id = %project_id, "task added");
        Ok(task)
    }

    /// Replaces the description of task `task_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when the task does not exist,
    /// [`TrackerError::InvalidInput`] when the description is empty after
    /// trimming, or a store error.
    pub fn update_task(&self, task_id: TaskId, description: &str) -> TrackerResult<Task> {
        let task_description = TaskDescription::new(description)?;
        self.mutate(task_id, |task, clock| {
            task.update_description(task_description, clock);
        })
        .inspect(|task| info!(task_id = %task.id(), "task updated"))
    }

    /// Removes task `task_id` and returns it.
    ///
    /// An absent identifier is a no-op: `Ok(None)` is returned and the store
    /// is not rewritten.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded or saved.
    pub fn delete_task(&self, task_id: TaskId) -> TrackerResult<Option<Task>> {
        let mut dataset = self.store.load()?;
        let Some(removed) = dataset.remove_task(task_id) else {
            info!(task_id = %task_id, "task to delete not present");
            return Ok(None);
        };
        self.store.save(&dataset)?;
        info!(task_id = %task_id, "task deleted");
        Ok(Some(removed))
    }

    /// Moves task `task_id` to `status`.
    ///
    /// Any status may follow any other, including itself; `updated_at` is
    /// refreshed either way.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskNotFound`] when the task does not exist,
    /// or a store error.
    pub fn set_status(&self, task_id: TaskId, status: TaskStatus) -> TrackerResult<Task> {
        self.mutate(task_id, |task, clock| task.set_status(status, clock))
            .inspect(|task| info!(task_id = %task.id(), status = %status, "task status changed"))
    }

    /// Moves task `task_id` to the status spelled `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidInput`] when `status` is not one of
    /// `todo`, `in-progress` or `done`, otherwise as [`Self::set_status`].
    pub fn set_status_str(&self, task_id: TaskId, status: &str) -> TrackerResult<Task> {
        let parsed = TaskStatus::try_from(status)?;
        self.set_status(task_id, parsed)
    }

    /// Returns the tasks matching `filter` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded.
    pub fn list_tasks(&self, filter: &TaskFilter) -> TrackerResult<Vec<Task>> {
        let dataset = self.store.load()?;
        Ok(dataset
            .tasks()
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect())
    }

    /// Returns task `task_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded.
    pub fn find_task(&self, task_id: TaskId) -> TrackerResult<Option<Task>> {
        Ok(self.store.load()?.task(task_id).cloned())
    }

    /// Loads the dataset, applies `change` to task `task_id`, saves, and
    /// returns the updated task.
    fn mutate(&self, task_id: TaskId, change: impl FnOnce(&mut Task, &C)) -> TrackerResult<Task> {
        let mut dataset = self.store.load()?;
        let task = dataset
            .task_mut(task_id)
            .ok_or(TrackerError::TaskNotFound(task_id))?;
        change(task, &*self.clock);
        let updated = task.clone();
        self.store.save(&dataset)?;
        Ok(updated)
    }
}
