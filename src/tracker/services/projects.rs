//! Repository over the project collection.

use std::sync::Arc;
use tracing::info;

use super::TrackerResult;
use crate::tracker::{
    domain::{Project, ProjectId, ProjectName},
    ports::DatasetStore,
};

/// Creates and enumerates projects.
///
/// Every call reloads the dataset from the store; nothing is cached.
#[derive(Debug)]
pub struct ProjectRepository<S>
where
    S: DatasetStore,
{
    store: Arc<S>,
}

impl<S> Clone for ProjectRepository<S>
where
    S: DatasetStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> ProjectRepository<S>
where
    S: DatasetStore,
{
    /// Creates a project repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a project named `name` under the next free identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidInput`](super::TrackerError::InvalidInput)
    /// when the name is empty after trimming or no project identifier is
    /// left to assign, or a store error when the dataset cannot be loaded or
    /// saved.
    pub fn add_project(&self, name: &str) -> TrackerResult<Project> {
        let project_name = ProjectName::new(name)?;
        let mut dataset = self.store.load()?;
        let project = dataset.add_project(project_name)?;
        self.store.save(&dataset)?;
        info!(project_id = %project.id(), name = %project.name(), "project added");
        Ok(project)
    }

    /// Returns all projects in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded.
    pub fn list_projects(&self) -> TrackerResult<Vec<Project>> {
        Ok(self.store.load()?.projects().to_vec())
    }

    /// Returns whether a project with identifier `id` exists.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded.
    pub fn project_exists(&self, id: ProjectId) -> TrackerResult<bool> {
        Ok(self.store.load()?.contains_project(id))
    }

    /// Returns the project with identifier `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns a store error when the dataset cannot be loaded.
    pub fn find_project(&self, id: ProjectId) -> TrackerResult<Option<Project>> {
        Ok(self.store.load()?.project(id).cloned())
    }
}
