//! Behaviour tests for task dependency rules.

#[path = "task_dependency_steps/mod.rs"]
mod task_dependency_steps_defs;

use rstest_bdd_macros::scenario;
use task_dependency_steps_defs::world::{DependencyWorld, world};

#[scenario(
    path = "tests/features/task_dependencies.feature",
    name = "Reject a dependency that closes a cycle"
)]
fn reject_dependency_cycle(world: DependencyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_dependencies.feature",
    name = "Reject a dependency on the task itself"
)]
fn reject_self_dependency(world: DependencyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_dependencies.feature",
    name = "Finishing the blocker unblocks the dependent task"
)]
fn finishing_blocker_unblocks(world: DependencyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_dependencies.feature",
    name = "Unfinished blocker keeps the dependent task blocked"
)]
fn unfinished_blocker_keeps_blocked(world: DependencyWorld) {
    let _ = world;
}
