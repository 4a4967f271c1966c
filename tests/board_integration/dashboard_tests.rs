//! Statistics and the activity feed over the demo board.

use rstest::rstest;
use taskboard::board::domain::{HistoryAction, TaskId, TaskPatch, TaskStatus, UserId};

use super::helpers::{TestService, demo_service};

#[rstest]
fn demo_board_statistics(demo_service: TestService) {
    let stats = demo_service.task_statistics().expect("stats");
    assert_eq!(stats.total, 8);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.in_progress, 3);
    assert_eq!(stats.to_do(), 3);
}

#[rstest]
fn demo_board_activity_feed_is_newest_first(demo_service: TestService) {
    let feed = demo_service.recent_activity().expect("activity");

    let summary: Vec<(u64, &str)> = feed
        .iter()
        .map(|item| (item.task_id.value(), item.action.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (8, "status changed to In Progress"),
            (8, "created"),
            (5, "status changed to In Progress"),
            (7, "created"),
            (5, "created"),
        ]
    );
    assert!(feed.windows(2).all(|pair| match pair {
        [newer, older] => newer.timestamp >= older.timestamp,
        _ => true,
    }));
    let newest = feed.first().expect("non-empty feed");
    assert_eq!(newest.task_title, "Prepare quarterly review presentation");
    assert_eq!(newest.user_name, "Lisa Manager");
}

#[rstest]
fn new_activity_moves_to_the_top_of_the_feed(demo_service: TestService) {
    demo_service
        .update_task(
            TaskId::new(1),
            TaskPatch::new().with_status(TaskStatus::InProgress),
            UserId::new(3),
        )
        .expect("start setup task");

    let feed = demo_service.recent_activity().expect("activity");
    let newest = feed.first().expect("non-empty feed");
    assert_eq!(newest.task_id, TaskId::new(1));
    assert_eq!(newest.user_name, "Mike QA");
    assert_eq!(newest.action, "status changed to In Progress");

    let history = demo_service.task_history(TaskId::new(1)).expect("history");
    assert_eq!(
        history.first().map(|entry| entry.action()),
        Some(HistoryAction::StatusChanged(TaskStatus::InProgress))
    );
}

#[rstest]
fn deleted_task_disappears_from_feed_and_statistics(demo_service: TestService) {
    demo_service.delete_task(TaskId::new(8)).expect("delete");

    let feed = demo_service.recent_activity().expect("activity");
    assert!(feed.iter().all(|item| item.task_id != TaskId::new(8)));
    assert!(demo_service
        .task_history(TaskId::new(8))
        .expect("history")
        .is_empty());
    assert_eq!(demo_service.task_statistics().expect("stats").total, 7);
    assert_eq!(demo_service.user_task_count(UserId::new(4)).expect("count"), 1);
}
