//! Maps parsed commands onto repository calls and renders the results.

use mockable::Clock;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;

use super::{Command, ListTasksArgs, render};
use crate::tracker::{
    domain::{ProjectId, TaskId, TaskStatus},
    ports::DatasetStore,
    services::{ProjectRepository, TaskFilter, TaskRepository, TrackerError, TrackerResult},
};

/// Errors raised while executing a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A repository operation failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    /// The result could not be written to the output stream.
    #[error("cannot write command output: {0}")]
    Output(#[from] io::Error),
}

/// Executes tracker commands against one store.
pub struct Dispatcher<S, C>
where
    S: DatasetStore,
    C: Clock + Send + Sync,
{
    projects: ProjectRepository<S>,
    tasks: TaskRepository<S, C>,
}

impl<S, C> Dispatcher<S, C>
where
    S: DatasetStore,
    C: Clock + Send + Sync,
{
    /// Creates a dispatcher whose repositories share `store`.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            projects: ProjectRepository::new(Arc::clone(&store)),
            tasks: TaskRepository::new(store, clock),
        }
    }

    /// Runs `command` and writes its human-readable result to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Tracker`] when the repository rejects the
    /// request and [`CommandError::Output`] when `out` cannot be written.
    pub fn execute(&self, command: &Command, out: &mut impl Write) -> Result<(), CommandError> {
        match command {
            Command::AddProject { name } => {
                let project = self.projects.add_project(&name.join(" "))?;
                writeln!(out, "Project added successfully (ID: {})", project.id())?;
            }
            Command::AddTask {
                project_id,
                description,
            } => {
                let id = parse_project_id(project_id)?;
                let task = self.tasks.add_task(id, &description.join(" "))?;
                writeln!(
                    out,
                    "Task added successfully under project {id} (ID: {})",
                    task.id()
                )?;
            }
            Command::UpdateTask {
                task_id,
                description,
            } => {
                let id = parse_task_id(task_id)?;
                self.tasks.update_task(id, &description.join(" "))?;
                writeln!(out, "Task {id} updated successfully.")?;
            }
            Command::DeleteTask { task_id } => {
                let id = parse_task_id(task_id)?;
                if self.tasks.delete_task(id)?.is_some() {
                    writeln!(out, "Task {id} deleted successfully.")?;
                } else {
                    writeln!(out, "Task {id} not found; nothing deleted.")?;
                }
            }
            Command::MarkTodo { task_id } => self.mark(task_id, TaskStatus::Todo, out)?,
            Command::MarkInProgress { task_id } => {
                self.mark(task_id, TaskStatus::InProgress, out)?;
            }
            Command::MarkDone { task_id } => self.mark(task_id, TaskStatus::Done, out)?,
            Command::ListTasks(args) => {
                let tasks = self.tasks.list_tasks(&task_filter(args)?)?;
                render::write_tasks(out, &tasks)?;
            }
            Command::ListProjects => {
                let projects = self.projects.list_projects()?;
                render::write_projects(out, &projects)?;
            }
        }
        Ok(())
    }

    fn mark(
        &self,
        task_id: &str,
        status: TaskStatus,
        out: &mut impl Write,
    ) -> Result<(), CommandError> {
        let id = parse_task_id(task_id)?;
        self.tasks.set_status(id, status)?;
        writeln!(out, "Task {id} marked as {status}.")?;
        Ok(())
    }
}

/// Builds a task filter from `list-tasks` arguments.
///
/// The positional filter is a project identifier when it consists only of
/// ASCII digits and a status otherwise.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidInput`] for an unknown status or a zero or
/// malformed project identifier.
pub fn task_filter(args: &ListTasksArgs) -> TrackerResult<TaskFilter> {
    let mut filter = TaskFilter::new();
    if let Some(raw) = &args.filter {
        filter = if is_numeric(raw) {
            filter.with_project(parse_project_id(raw)?)
        } else {
            filter.with_status_str(raw)?
        };
    }
    if let Some(raw) = &args.project {
        filter = filter.with_project(parse_project_id(raw)?);
    }
    if let Some(raw) = &args.status {
        filter = filter.with_status_str(raw)?;
    }
    Ok(filter)
}

fn is_numeric(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit())
}

/// Parses a project identifier argument.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidInput`] when `raw` is not a positive
/// integer.
pub fn parse_project_id(raw: &str) -> TrackerResult<ProjectId> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| TrackerError::InvalidInput(format!("invalid project ID '{raw}'")))?;
    Ok(ProjectId::new(value)?)
}

/// Parses a task identifier argument.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidInput`] when `raw` is not a positive
/// integer.
pub fn parse_task_id(raw: &str) -> TrackerResult<TaskId> {
    let value = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| TrackerError::InvalidInput(format!("invalid task ID '{raw}'")))?;
    Ok(TaskId::new(value)?)
}
