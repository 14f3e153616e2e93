//! In-memory dataset store for tests and embedding.

use std::io;
use std::sync::{Arc, RwLock};

use crate::tracker::{
    domain::Dataset,
    ports::{DatasetStore, StoreError, StoreResult},
};

const LOCATION: &str = "in-memory store";

/// Thread-safe in-memory dataset store.
///
/// Clones share the same underlying state, so a test can hand one clone to
/// a repository and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatasetStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    dataset: Option<Dataset>,
    corruption: Option<String>,
    saves: usize,
}

impl InMemoryDatasetStore {
    /// Creates an uninitialised store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `dataset`.
    #[must_use]
    pub fn with_dataset(dataset: Dataset) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.write() {
            state.dataset = Some(dataset);
        }
        store
    }

    /// Creates a store whose content fails to parse with `reason`.
    #[must_use]
    pub fn corrupted(reason: impl Into<String>) -> Self {
        let store = Self::default();
        if let Ok(mut state) = store.state.write() {
            state.corruption = Some(reason.into());
        }
        store
    }

    /// Returns the currently stored dataset, if initialised.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the state lock is poisoned.
    pub fn snapshot(&self) -> StoreResult<Option<Dataset>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.dataset.clone())
    }

    /// Returns how many times [`DatasetStore::save`] has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the state lock is poisoned.
    pub fn save_count(&self) -> StoreResult<usize> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.saves)
    }
}

fn poisoned(err: impl ToString) -> StoreError {
    StoreError::io(LOCATION, io::Error::other(err.to_string()))
}

impl DatasetStore for InMemoryDatasetStore {
    fn ensure_initialized(&self) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.dataset.is_none() && state.corruption.is_none() {
            state.dataset = Some(Dataset::new());
        }
        Ok(())
    }

    fn load(&self) -> StoreResult<Dataset> {
        let state = self.state.read().map_err(poisoned)?;
        if let Some(reason) = &state.corruption {
            return Err(StoreError::corrupt(LOCATION, reason));
        }
        state.dataset.clone().ok_or_else(|| {
            StoreError::io(
                LOCATION,
                io::Error::new(io::ErrorKind::NotFound, "store has not been initialised"),
            )
        })
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.dataset = Some(dataset.clone());
        state.corruption = None;
        state.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        LOCATION.to_owned()
    }
}
