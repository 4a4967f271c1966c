//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod store;

pub use store::{BoardStore, BoardStoreError, BoardStoreResult};
