//! In-memory adapter for the board store port.

mod board;
mod fixture;

pub use board::InMemoryBoardStore;
