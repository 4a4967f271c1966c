//! Demo team, tasks, and history used to populate a fresh board.

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};

use super::board::BoardState;
use crate::board::domain::{
    HistoryAction, NewUser, PersistedTaskData, Priority, Role, Task, TaskId, TaskStatus, User,
    UserId,
};

struct DemoTask {
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    priority: Priority,
    assignee: u64,
    age: TimeDelta,
}

struct DemoStatusChange {
    task: u64,
    status: TaskStatus,
    user: u64,
    age: TimeDelta,
}

const DEMO_USERS: [(&str, &str, Role); 4] = [
    ("John Developer", "john@company.com", Role::Developer),
    ("Sarah Designer", "sarah@company.com", Role::Designer),
    ("Mike QA", "mike@company.com", Role::Qa),
    ("Lisa Manager", "lisa@company.com", Role::Manager),
];

fn demo_tasks() -> [DemoTask; 8] {
    [
        DemoTask {
            title: "Setup project structure",
            description: "Initialize the project with proper folder structure and dependencies",
            status: TaskStatus::ToDo,
            priority: Priority::High,
            assignee: 1,
            age: TimeDelta::days(5),
        },
        DemoTask {
            title: "Design login page mockup",
            description: "Create wireframes and high-fidelity mockups for the login page",
            status: TaskStatus::InProgress,
            priority: Priority::Medium,
            assignee: 2,
            age: TimeDelta::days(4),
        },
        DemoTask {
            title: "Write user authentication tests",
            description: "Comprehensive test suite for authentication flows",
            status: TaskStatus::ToDo,
            priority: Priority::High,
            assignee: 3,
            age: TimeDelta::days(3),
        },
        DemoTask {
            title: "Review sprint planning",
            description: "Review and approve sprint planning for next iteration",
            status: TaskStatus::Done,
            priority: Priority::Low,
            assignee: 4,
            age: TimeDelta::days(6),
        },
        DemoTask {
            title: "Implement user registration API",
            description: "Backend API endpoints for user registration with validation",
            status: TaskStatus::InProgress,
            priority: Priority::High,
            assignee: 1,
            age: TimeDelta::days(2),
        },
        DemoTask {
            title: "Create color palette and typography guide",
            description: "Design system foundation with colors and typography",
            status: TaskStatus::Done,
            priority: Priority::Medium,
            assignee: 2,
            age: TimeDelta::days(7),
        },
        DemoTask {
            title: "Setup automated testing pipeline",
            description: "CI/CD pipeline with automated testing on every commit",
            status: TaskStatus::ToDo,
            priority: Priority::Medium,
            assignee: 3,
            age: TimeDelta::days(1),
        },
        DemoTask {
            title: "Prepare quarterly review presentation",
            description: "Slides and data for Q4 review meeting",
            status: TaskStatus::InProgress,
            priority: Priority::Low,
            assignee: 4,
            age: TimeDelta::hours(12),
        },
    ]
}

fn demo_status_changes() -> [DemoStatusChange; 5] {
    [
        DemoStatusChange {
            task: 2,
            status: TaskStatus::InProgress,
            user: 2,
            age: TimeDelta::days(3),
        },
        DemoStatusChange {
            task: 4,
            status: TaskStatus::Done,
            user: 4,
            age: TimeDelta::days(5),
        },
        DemoStatusChange {
            task: 5,
            status: TaskStatus::InProgress,
            user: 1,
            age: TimeDelta::days(1),
        },
        DemoStatusChange {
            task: 6,
            status: TaskStatus::Done,
            user: 2,
            age: TimeDelta::days(6),
        },
        DemoStatusChange {
            task: 8,
            status: TaskStatus::InProgress,
            user: 4,
            age: TimeDelta::hours(10),
        },
    ]
}

/// Populates `state` with the demo board as seen at `now`.
pub(super) fn seed(state: &mut BoardState, now: DateTime<Utc>) {
    for (id, (name, email, role)) in (1_u64..).zip(DEMO_USERS) {
        state.insert_user(User::from_new(
            UserId::new(id),
            NewUser::new(name, email, role),
        ));
    }

    for (id, demo) in (1_u64..).zip(demo_tasks()) {
        let task_id = TaskId::new(id);
        let assignee_id = UserId::new(demo.assignee);
        let created_at = now - demo.age;
        state.insert_task(Task::from_persisted(PersistedTaskData {
            id: task_id,
            title: demo.title.to_owned(),
            description: Some(demo.description.to_owned()),
            status: demo.status,
            priority: demo.priority,
            assignee_id,
            created_at,
            due_date: None,
            blocked_by: BTreeSet::new(),
        }));
        state.append_history(task_id, HistoryAction::Created, assignee_id, created_at);
    }

    for change in demo_status_changes() {
        state.append_history(
            TaskId::new(change.task),
            HistoryAction::StatusChanged(change.status),
            UserId::new(change.user),
            now - change.age,
        );
    }
}
