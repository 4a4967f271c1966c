//! Field-shape validation for board input.
//!
//! The store only enforces referential and graph invariants. Callers run
//! these rules first and surface the collected messages next to the
//! offending form fields.

pub mod rules;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Length limits applied to free-text fields, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum task title length.
    pub title_max_chars: usize,
    /// Maximum task description length.
    pub description_max_chars: usize,
    /// Maximum user name length.
    pub name_max_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            title_max_chars: 100,
            description_max_chars: 500,
            name_max_chars: 50,
        }
    }
}

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Task title.
    Title,
    /// Task description.
    Description,
    /// Task due date.
    DueDate,
    /// User name.
    Name,
    /// User email.
    Email,
}

impl Field {
    /// Returns the field key used by forms.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::DueDate => "dueDate",
            Self::Name => "name",
            Self::Email => "email",
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The title is blank.
    #[error("Title is required")]
    TitleRequired,

    /// The title exceeds the configured length.
    #[error("Title must be {max} characters or less")]
    TitleTooLong {
        /// Configured limit.
        max: usize,
    },

    /// The description exceeds the configured length.
    #[error("Description must be {max} characters or less")]
    DescriptionTooLong {
        /// Configured limit.
        max: usize,
    },

    /// The due date lies before today.
    #[error("Due date cannot be in the past")]
    DueDateInPast {
        /// Rejected due date.
        due: NaiveDate,
        /// Date the check ran on.
        today: NaiveDate,
    },

    /// The name is blank.
    #[error("Name is required")]
    NameRequired,

    /// The name exceeds the configured length.
    #[error("Name must be {max} characters or less")]
    NameTooLong {
        /// Configured limit.
        max: usize,
    },

    /// The email is blank.
    #[error("Email is required")]
    EmailRequired,

    /// The email does not look like an address.
    #[error("Invalid email format")]
    InvalidEmail(String),
}

impl ValidationError {
    /// Returns the field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::TitleRequired | Self::TitleTooLong { .. } => Field::Title,
            Self::DescriptionTooLong { .. } => Field::Description,
            Self::DueDateInPast { .. } => Field::DueDate,
            Self::NameRequired | Self::NameTooLong { .. } => Field::Name,
            Self::EmailRequired | Self::InvalidEmail(_) => Field::Email,
        }
    }
}

/// All validation failures found for one request, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Collects the failures from a set of rule results.
    ///
    /// # Errors
    ///
    /// Returns the collected failures when any result is an error.
    pub fn check(
        results: impl IntoIterator<Item = Result<(), ValidationError>>,
    ) -> Result<(), Self> {
        let errors: Vec<ValidationError> = results.into_iter().filter_map(Result::err).collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Self(errors))
        }
    }

    /// Returns the individual failures.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns the message for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.0
            .iter()
            .find(|error| error.field() == field)
            .map(ToString::to_string)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {error}", error.field().as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
