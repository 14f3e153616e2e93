//! Error types for tracker domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing tracker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyProjectName,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// The project identifier is not a positive integer.
    #[error("invalid project ID {0}, expected a positive integer")]
    InvalidProjectId(u64),

    /// The task identifier is not a positive integer.
    #[error("invalid task ID {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// Two projects in one dataset share an identifier.
    #[error("duplicate project ID {0}")]
    DuplicateProjectId(u64),

    /// Two tasks in one dataset share an identifier.
    #[error("duplicate task ID {0}")]
    DuplicateTaskId(u64),

    /// No project identifier is left above the highest one in use.
    #[error("no project IDs left to assign")]
    ProjectIdsExhausted,

    /// No task identifier is left above the highest one in use.
    #[error("no task IDs left to assign")]
    TaskIdsExhausted,
}

/// Error returned while parsing a task status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status '{0}', expected one of: todo, in-progress, done")]
pub struct ParseTaskStatusError(pub String);
