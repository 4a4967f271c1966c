//! Shared world state for task dependency BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{TaskId, User},
    services::{BoardService, BoardServiceError},
};
use taskboard::config::BoardConfig;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardStore, DefaultClock>;

/// Scenario world for dependency behaviour tests.
pub struct DependencyWorld {
    pub service: TestBoardService,
    pub member: Option<User>,
    pub tasks: HashMap<String, TaskId>,
    pub last_dependency_result: Option<Result<(), BoardServiceError>>,
}

impl DependencyWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let service = BoardService::new(
            Arc::new(InMemoryBoardStore::with_clock(Arc::clone(&clock))),
            clock,
            BoardConfig::default(),
        );

        Self {
            service,
            member: None,
            tasks: HashMap::new(),
            last_dependency_result: None,
        }
    }

    /// Looks up a task created earlier in the scenario by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.tasks
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for DependencyWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DependencyWorld {
    DependencyWorld::default()
}
