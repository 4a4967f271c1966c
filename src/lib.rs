//! Taskboard: an in-memory task board with a task dependency graph.
//!
//! Users create and assign tasks, move them through status columns, and
//! record which tasks block which. Every mutation of a task is written to an
//! append-only history that feeds the dashboard's recent-activity view.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`board`]: Users, tasks, history, and dependency tracking
//! - [`config`]: TOML-backed board configuration

pub mod board;
pub mod config;
