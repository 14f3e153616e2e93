//! Deterministic clocks and fixtures shared by tracker unit tests.

use chrono::{DateTime, Duration, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::tracker::{
    adapters::memory::InMemoryDatasetStore,
    ports::DatasetStore,
    services::{ProjectRepository, TaskRepository},
};

/// Clock that advances one second on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            start: epoch(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + Duration::seconds(tick)
    }
}

/// Clock that always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock(pub DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Repositories over one initialised in-memory store.
pub struct Harness {
    pub store: InMemoryDatasetStore,
    pub projects: ProjectRepository<InMemoryDatasetStore>,
    pub tasks: TaskRepository<InMemoryDatasetStore, SteppingClock>,
}

impl Harness {
    pub fn new() -> Self {
        Self::over(InMemoryDatasetStore::new())
    }

    pub fn over(store: InMemoryDatasetStore) -> Self {
        store.ensure_initialized().expect("initialise in-memory store");
        let shared = Arc::new(store.clone());
        Self {
            projects: ProjectRepository::new(Arc::clone(&shared)),
            tasks: TaskRepository::new(shared, Arc::new(SteppingClock::new())),
            store,
        }
    }
}
