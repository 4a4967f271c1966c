//! Individual field rules.
//!
//! Each rule is a pure function over one field. Rules return `Ok(())` on
//! success or the first [`ValidationError`] found for that field.

use super::{ValidationError, ValidationLimits};
use chrono::NaiveDate;

/// Validates a task title.
///
/// # Errors
///
/// Returns [`ValidationError::TitleRequired`] for a blank title or
/// [`ValidationError::TitleTooLong`] when it exceeds the limit.
pub fn validate_title(title: &str, limits: &ValidationLimits) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if title.chars().count() > limits.title_max_chars {
        return Err(ValidationError::TitleTooLong {
            max: limits.title_max_chars,
        });
    }
    Ok(())
}

/// Validates an optional task description.
///
/// # Errors
///
/// Returns [`ValidationError::DescriptionTooLong`] when it exceeds the
/// limit.
pub fn validate_description(
    description: Option<&str>,
    limits: &ValidationLimits,
) -> Result<(), ValidationError> {
    match description {
        Some(text) if text.chars().count() > limits.description_max_chars => {
            Err(ValidationError::DescriptionTooLong {
                max: limits.description_max_chars,
            })
        }
        _ => Ok(()),
    }
}

/// Validates that a due date is not before `today`.
///
/// # Errors
///
/// Returns [`ValidationError::DueDateInPast`] for dates before `today`.
pub fn validate_due_date(
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Result<(), ValidationError> {
    match due_date {
        Some(date) if date < today => Err(ValidationError::DueDateInPast { due: date, today }),
        _ => Ok(()),
    }
}

/// Validates a user display name.
///
/// # Errors
///
/// Returns [`ValidationError::NameRequired`] for a blank name or
/// [`ValidationError::NameTooLong`] when it exceeds the limit.
pub fn validate_name(name: &str, limits: &ValidationLimits) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if name.chars().count() > limits.name_max_chars {
        return Err(ValidationError::NameTooLong {
            max: limits.name_max_chars,
        });
    }
    Ok(())
}

/// Validates an email address.
///
/// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@`, and a
/// dot inside the domain with text on both sides.
///
/// # Errors
///
/// Returns [`ValidationError::EmailRequired`] for a blank address or
/// [`ValidationError::InvalidEmail`] for anything else that does not match.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    if is_plausible_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_owned()))
    }
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.chars().count().saturating_sub(1);
    domain
        .chars()
        .enumerate()
        .any(|(index, ch)| ch == '.' && index > 0 && index < last)
}
