//! Seeds an in-memory board and logs the dashboard views.
//!
//! Usage:
//!
//! ```text
//! board_demo [config-path]
//! ```
//!
//! Without a config path the demo board is seeded with default settings.
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use std::process::ExitCode;
use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::board::{
    adapters::memory::InMemoryBoardStore,
    domain::{TaskId, TaskPatch, TaskStatus, UserId},
    services::{BoardService, BoardServiceError},
};
use taskboard::config::{BoardConfig, ConfigError};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Board(#[from] BoardServiceError),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

fn load_config() -> Result<BoardConfig, ConfigError> {
    std::env::args().nth(1).map_or_else(
        || {
            Ok(BoardConfig {
                seed_demo_data: true,
                ..BoardConfig::default()
            })
        },
        BoardConfig::load,
    )
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    let clock = Arc::new(DefaultClock);
    let store = if config.seed_demo_data {
        InMemoryBoardStore::with_demo_data(Arc::clone(&clock))
    } else {
        InMemoryBoardStore::with_clock(Arc::clone(&clock))
    };
    let service = BoardService::new(Arc::new(store), clock, config);

    let setup = TaskId::new(1);
    let tests = TaskId::new(3);
    if service.find_task(setup)?.is_some() && service.find_task(tests)?.is_some() {
        service.add_dependency(tests, setup)?;
        info!(
            task = %tests,
            blocked = service.is_task_blocked(tests)?,
            "authentication tests wait on project setup"
        );
        service.update_task(
            setup,
            TaskPatch::new().with_status(TaskStatus::Done),
            UserId::new(1),
        )?;
        info!(
            task = %tests,
            blocked = service.is_task_blocked(tests)?,
            "project setup finished"
        );
    }

    let stats = service.task_statistics()?;
    info!(
        total = stats.total,
        completed = stats.completed,
        in_progress = stats.in_progress,
        to_do = stats.to_do(),
        "task statistics"
    );

    for activity in service.recent_activity()? {
        info!(
            task = %activity.task_title,
            user = %activity.user_name,
            at = %activity.timestamp,
            "{}",
            activity.action
        );
    }

    for user in service.list_users()? {
        info!(
            user = %user.name(),
            role = %user.role(),
            tasks = service.user_task_count(user.id())?,
            "team member"
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "board demo failed");
            ExitCode::FAILURE
        }
    }
}
