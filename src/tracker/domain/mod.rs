//! Domain model for projects, tasks and the persisted dataset.
//!
//! Everything here is plain data plus the record lifecycle rules. File
//! handling lives behind the store port.

mod dataset;
mod error;
mod ids;
mod project;
mod task;
mod timestamp;

pub use dataset::Dataset;
pub use error::{DomainError, ParseTaskStatusError};
pub use ids::{ProjectId, ProjectName, TaskDescription, TaskId};
pub use project::Project;
pub use task::{Task, TaskStatus};
