//! When steps for tracker workflow BDD scenarios.

use super::world::{TrackerWorld, task_id};
use rstest_bdd_macros::when;
use tasktrack::tracker::domain::ProjectId;

#[when(r#"a project named "{name}" is added"#)]
fn add_project(world: &mut TrackerWorld, name: String) {
    let result = world.projects.add_project(&name);
    world.record(result);
}

#[when(r#"the task "{description}" is added to project {project:u64}"#)]
fn add_task(
    world: &mut TrackerWorld,
    description: String,
    project: u64,
) -> Result<(), eyre::Report> {
    let project_id = ProjectId::new(project)
        .map_err(|err| eyre::eyre!("invalid project id in scenario: {err}"))?;
    let result = world.tasks.add_task(project_id, &description);
    world.record(result);
    Ok(())
}

#[when(r#"task {id:u64} is marked as "{status}""#)]
fn mark_task(world: &mut TrackerWorld, id: u64, status: String) -> Result<(), eyre::Report> {
    let result = world.tasks.set_status_str(task_id(id)?, &status);
    world.record(result);
    Ok(())
}

#[when("task {id:u64} is deleted")]
fn delete_task(world: &mut TrackerWorld, id: u64) -> Result<(), eyre::Report> {
    match world.tasks.delete_task(task_id(id)?) {
        Ok(removed) => {
            world.last_deleted = Some(removed);
            world.last_error = None;
        }
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}
