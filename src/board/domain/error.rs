//! Error types for parsing board domain values.

use thiserror::Error;

/// Error returned while parsing a task status label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing a task priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned while parsing a user role label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown user role: {0}")]
pub struct ParseRoleError(pub String);

/// Error returned while parsing a user or task identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid identifier '{0}', expected a positive integer")]
pub struct ParseIdError(pub String);
