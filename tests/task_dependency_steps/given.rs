//! Given steps for task dependency BDD scenarios.

use super::world::DependencyWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::{NewTask, NewUser, Priority, Role};

#[given(r#"a board member "{name}""#)]
fn board_member(world: &mut DependencyWorld, name: String) -> Result<(), eyre::Report> {
    let email = format!("{}@company.com", name.replace(' ', ".").to_lowercase());
    let member = world
        .service
        .create_user(NewUser::new(name, email, Role::Developer))
        .wrap_err("create board member for scenario")?;
    world.member = Some(member);
    Ok(())
}

#[given(r#"a task "{title}""#)]
fn a_task(world: &mut DependencyWorld, title: String) -> Result<(), eyre::Report> {
    let assignee = world
        .member
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board member in scenario world"))?
        .id();
    let task = world
        .service
        .create_task(NewTask::new(title.clone(), Priority::Medium, assignee))
        .wrap_err("create task for scenario")?;
    world.tasks.insert(title, task.id());
    Ok(())
}

#[given(r#"task "{task}" waits on "{blocker}""#)]
fn task_waits_on(
    world: &mut DependencyWorld,
    task: String,
    blocker: String,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&task)?;
    let blocker_id = world.task_id(&blocker)?;
    world
        .service
        .add_dependency(task_id, blocker_id)
        .wrap_err("add dependency in scenario setup")?;
    Ok(())
}
