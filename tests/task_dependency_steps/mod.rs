//! Step definitions for task dependency scenarios.

mod given;
mod then;
mod when;
pub mod world;
