//! Repositories over the persisted dataset.
//!
//! Each public operation is one complete unit: load the whole dataset,
//! change it in memory, and write it back.

mod error;
mod projects;
mod tasks;

pub use error::{ErrorKind, TrackerError, TrackerResult};
pub use projects::ProjectRepository;
pub use tasks::{TaskFilter, TaskRepository};
