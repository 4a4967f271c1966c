//! When steps for task dependency BDD scenarios.

use super::world::DependencyWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{TaskPatch, TaskStatus};

#[when(r#"task "{task}" is made to wait on "{blocker}""#)]
fn make_task_wait_on(
    world: &mut DependencyWorld,
    task: String,
    blocker: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let blocker_id = world.task_id(&blocker)?;
    world.last_dependency_result = Some(world.service.add_dependency(task_id, blocker_id));
    Ok(())
}

#[when(r#"task "{task}" is moved to "{status}""#)]
fn move_task(world: &mut DependencyWorld, task: String, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let acting_user = world
        .member
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board member in scenario world"))?
        .id();
    world
        .service
        .update_task(task_id, TaskPatch::new().with_status(target), acting_user)
        .wrap_err("move task in scenario")?;
    Ok(())
}
