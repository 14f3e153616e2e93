//! Store port: whole-dataset load and save.

use crate::tracker::domain::Dataset;
use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Result type for dataset store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for the tracker dataset.
///
/// Implementations hold no cached copy between calls: every `load` reads
/// the backing medium and every `save` replaces it in full.
pub trait DatasetStore: Send + Sync {
    /// Creates the backing medium with an empty dataset when it is missing.
    ///
    /// Existing content is left untouched and is not validated.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the medium cannot be created.
    fn ensure_initialized(&self) -> StoreResult<()>;

    /// Reads and parses the entire dataset.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] when the content is not a well-formed
    /// dataset, or [`StoreError::Io`] when it cannot be read.
    fn load(&self) -> StoreResult<Dataset>;

    /// Replaces the stored dataset with `dataset`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] or [`StoreError::Io`] when the dataset
    /// cannot be written.
    fn save(&self, dataset: &Dataset) -> StoreResult<()>;

    /// Returns a human-readable description of where the dataset lives.
    fn location(&self) -> String;
}

/// Errors returned by dataset store implementations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing medium could not be read or written.
    #[error("cannot access task store {location}: {source}")]
    Io {
        /// Where the dataset lives.
        location: String,
        /// Underlying I/O failure.
        #[source]
        source: Arc<io::Error>,
    },

    /// The stored content is not a well-formed dataset.
    #[error("task store {location} is corrupt: {reason}")]
    Corrupt {
        /// Where the dataset lives.
        location: String,
        /// Parse or validation failure.
        reason: String,
    },

    /// The dataset could not be serialised.
    #[error("cannot encode dataset for {location}: {reason}")]
    Encode {
        /// Where the dataset lives.
        location: String,
        /// Serialiser failure.
        reason: String,
    },
}

impl StoreError {
    /// Wraps an I/O failure.
    pub fn io(location: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            location: location.into(),
            source: Arc::new(source),
        }
    }

    /// Reports content that is not a well-formed dataset.
    pub fn corrupt(location: impl Into<String>, reason: impl ToString) -> Self {
        Self::Corrupt {
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns whether the error signals unusable stored content.
    #[must_use]
    pub const fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }
}
