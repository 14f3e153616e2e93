//! Error type shared by the project and task repositories.

use crate::tracker::{
    domain::{DomainError, ParseTaskStatusError, ProjectId, TaskId},
    ports::StoreError,
};
use thiserror::Error;

/// Repository-level errors surfaced to the command boundary.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Empty text, an unknown status, or an unparsable identifier.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The referenced project does not exist.
    #[error("project with ID {0} does not exist")]
    ProjectNotFound(ProjectId),

    /// The referenced task does not exist.
    #[error("task with ID {0} not found")]
    TaskNotFound(TaskId),

    /// The backing store holds content that is not a well-formed dataset.
    #[error("task store {location} is unusable: {reason}")]
    CorruptStore {
        /// Where the dataset lives.
        location: String,
        /// Parse or validation failure.
        reason: String,
    },

    /// The backing store could not be read or written.
    #[error(transparent)]
    Store(StoreError),
}

/// Coarse classification of a [`TrackerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`TrackerError::InvalidInput`].
    InvalidInput,
    /// See [`TrackerError::ProjectNotFound`].
    ProjectNotFound,
    /// See [`TrackerError::TaskNotFound`].
    TaskNotFound,
    /// See [`TrackerError::CorruptStore`].
    CorruptStore,
    /// See [`TrackerError::Store`].
    Storage,
}

impl TrackerError {
    /// Creates an input error from any displayable cause.
    pub fn invalid_input(cause: impl ToString) -> Self {
        Self::InvalidInput(cause.to_string())
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::ProjectNotFound(_) => ErrorKind::ProjectNotFound,
            Self::TaskNotFound(_) => ErrorKind::TaskNotFound,
            Self::CorruptStore { .. } => ErrorKind::CorruptStore,
            Self::Store(_) => ErrorKind::Storage,
        }
    }
}

impl From<StoreError> for TrackerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupt { location, reason } => Self::CorruptStore { location, reason },
            other => Self::Store(other),
        }
    }
}

impl From<DomainError> for TrackerError {
    fn from(err: DomainError) -> Self {
        Self::invalid_input(err)
    }
}

impl From<ParseTaskStatusError> for TrackerError {
    fn from(err: ParseTaskStatusError) -> Self {
        Self::invalid_input(err)
    }
}

/// Result type for repository operations.
pub type TrackerResult<T> = Result<T, TrackerError>;
