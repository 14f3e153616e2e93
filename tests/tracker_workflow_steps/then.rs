//! Then steps for tracker workflow BDD scenarios.

use super::world::{TrackerWorld, task_id};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use tasktrack::tracker::{
    domain::{ProjectId, TaskStatus},
    services::{ErrorKind, TaskFilter},
};

fn expect_error_kind(world: &TrackerWorld, expected: ErrorKind) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last command to fail"))?;
    if err.kind() != expected {
        return Err(eyre::eyre!("expected {expected:?} error, got {err:?}"));
    }
    Ok(())
}

fn expect_count(found: usize, expected: usize) -> Result<(), eyre::Report> {
    if found != expected {
        return Err(eyre::eyre!("expected {expected} tasks, found {found}"));
    }
    Ok(())
}

#[then(r#"listing tasks with status "{status}" shows {count:usize} task"#)]
fn tasks_with_status(
    world: &TrackerWorld,
    status: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let filter = TaskFilter::new()
        .with_status_str(&status)
        .wrap_err("build status filter")?;
    let tasks = world.tasks.list_tasks(&filter).wrap_err("list tasks")?;
    expect_count(tasks.len(), count)
}

#[then("listing tasks for project {project:u64} shows {count:usize} task")]
fn tasks_for_project(world: &TrackerWorld, project: u64, count: usize) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new(project)
        .map_err(|err| eyre::eyre!("invalid project id in scenario: {err}"))?;
    let tasks = world
        .tasks
        .list_tasks(&TaskFilter::new().with_project(project_id))
        .wrap_err("list tasks")?;
    expect_count(tasks.len(), count)
}

#[then(r#"task {id:u64} has description "{description}""#)]
fn task_has_description(
    world: &TrackerWorld,
    id: u64,
    description: String,
) -> Result<(), eyre::Report> {
    let task = world
        .tasks
        .find_task(task_id(id)?)
        .wrap_err("find task")?
        .ok_or_else(|| eyre::eyre!("task {id} is missing"))?;
    if task.description().as_str() != description {
        return Err(eyre::eyre!(
            "expected description {description:?}, found {:?}",
            task.description().as_str()
        ));
    }
    Ok(())
}

#[then(r#"task {id:u64} has status "{status}""#)]
fn task_has_status(world: &TrackerWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world
        .tasks
        .find_task(task_id(id)?)
        .wrap_err("find task")?
        .ok_or_else(|| eyre::eyre!("task {id} is missing"))?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the last command fails with a project not found error")]
fn fails_with_project_not_found(world: &TrackerWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, ErrorKind::ProjectNotFound)
}

#[then("the last command fails with an invalid input error")]
fn fails_with_invalid_input(world: &TrackerWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, ErrorKind::InvalidInput)
}

#[then("the store holds no tasks")]
fn store_holds_no_tasks(world: &TrackerWorld) -> Result<(), eyre::Report> {
    let tasks = world
        .tasks
        .list_tasks(&TaskFilter::new())
        .wrap_err("list tasks")?;
    expect_count(tasks.len(), 0)
}

#[then("no task was deleted")]
fn no_task_deleted(world: &TrackerWorld) -> Result<(), eyre::Report> {
    match &world.last_deleted {
        Some(None) => Ok(()),
        Some(Some(task)) => Err(eyre::eyre!("unexpectedly deleted task {}", task.id())),
        None => Err(eyre::eyre!("delete was not attempted or failed")),
    }
}
