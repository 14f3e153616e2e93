//! Given steps for tracker workflow BDD scenarios.

use super::world::TrackerWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::tracker::ports::DatasetStore;

#[given("an empty task store")]
fn empty_task_store(world: &mut TrackerWorld) -> Result<(), eyre::Report> {
    world
        .store
        .ensure_initialized()
        .wrap_err("initialise in-memory store")
}

#[given(r#"a project named "{name}" holding the task "{description}""#)]
fn project_with_task(
    world: &mut TrackerWorld,
    name: String,
    description: String,
) -> Result<(), eyre::Report> {
    world
        .store
        .ensure_initialized()
        .wrap_err("initialise in-memory store")?;
    let project = world
        .projects
        .add_project(&name)
        .wrap_err("add project in scenario setup")?;
    world
        .tasks
        .add_task(project.id(), &description)
        .wrap_err("add task in scenario setup")?;
    Ok(())
}
