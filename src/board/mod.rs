//! Task board: users, tasks, history, and the task dependency graph.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types and graph algorithms in [`domain`]
//! - The store contract in [`ports`]
//! - The in-memory store in [`adapters`]
//! - Field-shape checks in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
