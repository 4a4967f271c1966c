//! Shared fixtures for board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{NewTask, NewUser, Priority, Role, Task, User},
    ports::BoardStore,
    services::BoardService,
};
use taskboard::config::BoardConfig;

/// Service type used across integration tests.
pub type TestService = BoardService<InMemoryBoardStore, DefaultClock>;

/// Provides an empty in-memory store.
#[fixture]
pub fn store() -> InMemoryBoardStore {
    InMemoryBoardStore::new()
}

/// Provides a service over the demo board.
#[fixture]
pub fn demo_service() -> TestService {
    let clock = Arc::new(DefaultClock);
    BoardService::new(
        Arc::new(InMemoryBoardStore::with_demo_data(Arc::clone(&clock))),
        clock,
        BoardConfig {
            seed_demo_data: true,
            ..BoardConfig::default()
        },
    )
}

/// Creates a developer with a derived email address.
pub fn add_user(store: &impl BoardStore, name: &str) -> User {
    store
        .create_user(NewUser::new(
            name,
            format!("{}@company.com", name.to_lowercase()),
            Role::Developer,
        ))
        .expect("user creation should succeed")
}

/// Creates a medium-priority task assigned to `assignee`.
pub fn add_task(store: &impl BoardStore, title: &str, assignee: &User) -> Task {
    store
        .create_task(NewTask::new(title, Priority::Medium, assignee.id()))
        .expect("task creation should succeed")
}
