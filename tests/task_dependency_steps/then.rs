//! Then steps for task dependency BDD scenarios.

use super::world::DependencyWorld;
use rstest_bdd_macros::then;
use taskboard::board::{ports::BoardStoreError, services::BoardServiceError};

#[then("the dependency is rejected as a cycle")]
fn rejected_as_cycle(world: &DependencyWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_dependency_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing dependency result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Store(BoardStoreError::DependencyCycle { .. }))
    ) {
        return Err(eyre::eyre!("expected DependencyCycle error, got {result:?}"));
    }
    Ok(())
}

#[then("the dependency is rejected as a self dependency")]
fn rejected_as_self_dependency(world: &DependencyWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_dependency_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing dependency result"))?;

    if !matches!(
        result,
        Err(BoardServiceError::Store(BoardStoreError::SelfDependency(_)))
    ) {
        return Err(eyre::eyre!("expected SelfDependency error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"task "{task}" is blocked"#)]
fn task_is_blocked(world: &DependencyWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    if !world.service.is_task_blocked(task_id)? {
        return Err(eyre::eyre!("expected {task:?} to be blocked"));
    }
    Ok(())
}

#[then(r#"task "{task}" is not blocked"#)]
fn task_is_not_blocked(world: &DependencyWorld, task: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    if world.service.is_task_blocked(task_id)? {
        return Err(eyre::eyre!("expected {task:?} to be unblocked"));
    }
    Ok(())
}

#[then(r#"the latest history entry for "{task}" reads "{label}""#)]
fn latest_history_entry(
    world: &DependencyWorld,
    task: String,
    label: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let history = world.service.task_history(task_id)?;
    let latest = history
        .first()
        .ok_or_else(|| eyre::eyre!("no history recorded for {task:?}"))?;
    if latest.action().to_string() != label {
        return Err(eyre::eyre!(
            "expected latest entry {label:?}, found {:?}",
            latest.action().to_string()
        ));
    }
    Ok(())
}
