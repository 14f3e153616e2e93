//! Plain-text rendering of tracker records.

use std::io::{self, Write};

use crate::tracker::domain::{Project, Task};

/// Writes one line per project as `<id>: <name>`.
pub(super) fn write_projects(out: &mut impl Write, projects: &[Project]) -> io::Result<()> {
    if projects.is_empty() {
        return writeln!(out, "No projects found.");
    }
    for project in projects {
        writeln!(out, "{}: {}", project.id(), project.name())?;
    }
    Ok(())
}

/// Writes one line per task with its status and timestamps.
pub(super) fn write_tasks(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(out, "No tasks found.");
    }
    for task in tasks {
        writeln!(
            out,
            "{}: {} [{}] (Created: {}, Updated: {})",
            task.id(),
            task.description(),
            task.status(),
            task.created_at().to_rfc3339(),
            task.updated_at().to_rfc3339(),
        )?;
    }
    Ok(())
}
