//! Parallel callers sharing one store.

use std::collections::BTreeSet;
use std::thread;

use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{HistoryAction, NewTask, Priority, TaskPatch, TaskStatus},
    ports::BoardStore,
};

use super::helpers::{add_task, add_user, store};

const WORKERS: u64 = 8;
const TASKS_PER_WORKER: u64 = 25;

#[rstest]
fn concurrent_creates_never_share_an_identifier(store: InMemoryBoardStore) {
    let owner_id = add_user(&store, "Ada").id();

    let ids: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|worker| {
                let shared = &store;
                scope.spawn(move || {
                    (0..TASKS_PER_WORKER)
                        .map(|n| {
                            shared
                                .create_task(NewTask::new(
                                    format!("worker {worker} task {n}"),
                                    Priority::Low,
                                    owner_id,
                                ))
                                .expect("create task")
                                .id()
                                .value()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("worker thread"))
            .collect()
    });

    let unique: BTreeSet<u64> = ids.iter().copied().collect();
    let expected = usize::try_from(WORKERS * TASKS_PER_WORKER).expect("fits usize");
    assert_eq!(unique.len(), expected);
    assert_eq!(unique.first().copied(), Some(1));
    assert_eq!(unique.last().copied(), Some(WORKERS * TASKS_PER_WORKER));
    assert_eq!(store.list_tasks().expect("list").len(), expected);
}

#[rstest]
fn concurrent_status_changes_each_leave_one_history_entry(store: InMemoryBoardStore) {
    let owner = add_user(&store, "Ada");
    let tasks: Vec<_> = (0..WORKERS)
        .map(|n| add_task(&store, &format!("task {n}"), &owner))
        .collect();

    thread::scope(|scope| {
        for task in &tasks {
            let shared = &store;
            let acting = owner.id();
            scope.spawn(move || {
                shared
                    .update_task(
                        task.id(),
                        TaskPatch::new().with_status(TaskStatus::InProgress),
                        acting,
                    )
                    .expect("start task");
                shared
                    .update_task(
                        task.id(),
                        TaskPatch::new().with_status(TaskStatus::Done),
                        acting,
                    )
                    .expect("finish task");
            });
        }
    });

    for task in &tasks {
        let actions: Vec<HistoryAction> = store
            .task_history(task.id())
            .expect("history")
            .iter()
            .map(|entry| entry.action())
            .collect();
        assert_eq!(
            actions,
            vec![
                HistoryAction::StatusChanged(TaskStatus::Done),
                HistoryAction::StatusChanged(TaskStatus::InProgress),
                HistoryAction::Created,
            ]
        );
    }
    let stats = store.task_statistics().expect("stats");
    assert_eq!(stats.completed, tasks.len());
}

#[rstest]
fn clones_share_the_same_board(store: InMemoryBoardStore) {
    let other = store.clone();
    let owner = add_user(&other, "Ada");
    add_task(&store, "Visible through both handles", &owner);

    assert_eq!(other.list_tasks().expect("list").len(), 1);
    assert_eq!(store.user_task_count(owner.id()).expect("count"), 1);
}
