//! Shared world state for tracker workflow BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::tracker::{
    adapters::memory::InMemoryDatasetStore,
    domain::{Task, TaskId},
    services::{ProjectRepository, TaskRepository, TrackerError},
};

/// Task repository type used by the BDD world.
pub type TestTaskRepository = TaskRepository<InMemoryDatasetStore, DefaultClock>;

/// Scenario world for tracker workflow behaviour tests.
pub struct TrackerWorld {
    pub store: InMemoryDatasetStore,
    pub projects: ProjectRepository<InMemoryDatasetStore>,
    pub tasks: TestTaskRepository,
    pub last_error: Option<TrackerError>,
    pub last_deleted: Option<Option<Task>>,
}

impl TrackerWorld {
    /// Creates a world over an uninitialised in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryDatasetStore::new();
        let shared = Arc::new(store.clone());
        Self {
            store,
            projects: ProjectRepository::new(Arc::clone(&shared)),
            tasks: TaskRepository::new(shared, Arc::new(DefaultClock)),
            last_error: None,
            last_deleted: None,
        }
    }

    /// Records the outcome of a command, keeping only its error.
    pub fn record<T>(&mut self, result: Result<T, TrackerError>) {
        self.last_error = result.err();
    }
}

impl Default for TrackerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackerWorld {
    TrackerWorld::default()
}

/// Parses a task identifier written in a scenario step.
pub fn task_id(raw: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(raw).map_err(|err| eyre::eyre!("invalid task id in scenario: {err}"))
}
