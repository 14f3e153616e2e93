//! Command-line surface of the tracker.
//!
//! Parses arguments with `clap`, resolves configuration, installs logging,
//! and dispatches each command to the repositories. Output is written to a
//! caller-supplied stream so the dispatcher can be exercised in tests.

mod args;
mod config;
mod dispatch;
mod render;

pub use args::{Cli, Command, DEFAULT_STORE_PATH, ListTasksArgs};
pub use config::{DEFAULT_LOG_FILTER, TrackerConfig, init_logging};
pub use dispatch::{CommandError, Dispatcher, parse_project_id, parse_task_id, task_filter};
