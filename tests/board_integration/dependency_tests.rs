//! Blocking graph behaviour through the public service.

use rstest::rstest;
use taskboard::board::{
    domain::{Task, TaskId, TaskPatch, TaskStatus, UserId},
    ports::BoardStoreError,
    services::BoardServiceError,
};

use super::helpers::{TestService, demo_service};

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

#[rstest]
fn chain_reports_direct_and_transitive_blockers(demo_service: TestService) {
    let structure = TaskId::new(1);
    let api = TaskId::new(5);
    let tests = TaskId::new(3);
    demo_service.add_dependency(api, structure).expect("api waits on structure");
    demo_service.add_dependency(tests, api).expect("tests wait on api");

    assert_eq!(ids(&demo_service.blocking_tasks(tests).expect("direct")), vec![5]);
    assert_eq!(
        ids(&demo_service.transitive_blockers(tests).expect("transitive")),
        vec![1, 5]
    );
    assert_eq!(ids(&demo_service.blocked_tasks(structure).expect("dependents")), vec![5]);

    let closing = demo_service.add_dependency(structure, tests);
    assert!(matches!(
        closing,
        Err(BoardServiceError::Store(BoardStoreError::DependencyCycle { .. }))
    ));
}

#[rstest]
fn task_stays_blocked_until_every_blocker_is_done(demo_service: TestService) {
    let release = TaskId::new(7);
    demo_service.add_dependency(release, TaskId::new(1)).expect("edge");
    demo_service.add_dependency(release, TaskId::new(4)).expect("edge");
    assert!(demo_service.is_task_blocked(release).expect("blocked"));

    demo_service
        .update_task(
            TaskId::new(1),
            TaskPatch::new().with_status(TaskStatus::Done),
            UserId::new(1),
        )
        .expect("finish structure");
    assert!(!demo_service.is_task_blocked(release).expect("blocked"));

    demo_service
        .update_task(
            TaskId::new(4),
            TaskPatch::new().with_status(TaskStatus::InProgress),
            UserId::new(4),
        )
        .expect("reopen review");
    assert!(demo_service.is_task_blocked(release).expect("blocked"));
}

#[rstest]
fn deleting_a_blocker_leaves_the_dependent_unblocked(demo_service: TestService) {
    let dependent = TaskId::new(3);
    let blocker = TaskId::new(2);
    demo_service.add_dependency(dependent, blocker).expect("edge");
    demo_service.delete_task(blocker).expect("delete blocker");

    assert!(demo_service.blocking_tasks(dependent).expect("direct").is_empty());
    assert!(!demo_service.is_task_blocked(dependent).expect("blocked"));
    demo_service
        .remove_dependency(dependent, blocker)
        .expect("dangling edge can still be removed");
}

#[rstest]
fn duplicate_and_missing_edges_are_reported(demo_service: TestService) {
    let task = TaskId::new(3);
    let blocker = TaskId::new(1);
    demo_service.add_dependency(task, blocker).expect("edge");

    assert!(matches!(
        demo_service.add_dependency(task, blocker),
        Err(BoardServiceError::Store(BoardStoreError::DuplicateDependency { .. }))
    ));
    assert!(matches!(
        demo_service.remove_dependency(blocker, task),
        Err(BoardServiceError::Store(BoardStoreError::DependencyNotFound { .. }))
    ));
    assert!(matches!(
        demo_service.add_dependency(task, TaskId::new(99)),
        Err(BoardServiceError::Store(BoardStoreError::TaskNotFound(_)))
    ));
}
