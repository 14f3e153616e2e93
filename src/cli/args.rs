//! Command-line argument definitions.

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};

/// Default location of the task store, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "tasks.json";

/// Command-line interface of the task tracker.
#[derive(Debug, Parser)]
#[command(name = "tasktrack", version, about = "Track projects and tasks in a local JSON file")]
pub struct Cli {
    /// Path of the JSON task store.
    #[arg(
        long,
        global = true,
        env = "TASKTRACK_STORE",
        default_value = DEFAULT_STORE_PATH,
        value_name = "PATH"
    )]
    pub store: Utf8PathBuf,

    /// Log filter used when `RUST_LOG` is unset (for example `info`).
    #[arg(long, global = true, env = "TASKTRACK_LOG", value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Tracker commands.
///
/// Identifiers are accepted as text and parsed by the dispatcher so that a
/// malformed value is reported as an input error.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create a project.
    AddProject {
        /// Project name; words are joined with single spaces.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        name: Vec<String>,
    },
    /// Add a task to a project.
    AddTask {
        /// Identifier of the owning project.
        project_id: String,
        /// Task description; words are joined with single spaces.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Replace a task's description.
    UpdateTask {
        /// Identifier of the task.
        task_id: String,
        /// New description; words are joined with single spaces.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },
    /// Delete a task.
    DeleteTask {
        /// Identifier of the task.
        task_id: String,
    },
    /// Mark a task as `todo`.
    MarkTodo {
        /// Identifier of the task.
        task_id: String,
    },
    /// Mark a task as `in-progress`.
    MarkInProgress {
        /// Identifier of the task.
        task_id: String,
    },
    /// Mark a task as `done`.
    MarkDone {
        /// Identifier of the task.
        task_id: String,
    },
    /// List tasks, optionally filtered by project or status.
    ListTasks(ListTasksArgs),
    /// List all projects.
    ListProjects,
}

/// Filters accepted by `list-tasks`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct ListTasksArgs {
    /// A project identifier when numeric, otherwise a status.
    #[arg(value_name = "PROJECT_ID|STATUS", conflicts_with_all = ["project", "status"])]
    pub filter: Option<String>,

    /// Only tasks of this project.
    #[arg(long, value_name = "PROJECT_ID")]
    pub project: Option<String>,

    /// Only tasks in this status (`todo`, `in-progress` or `done`).
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
}
