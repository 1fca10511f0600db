//! Length and presence checks shared by the per-entity validation modules.
//!
//! Lengths are counted in characters, matching PostgreSQL `VARCHAR(n)`.
//! PostgreSQL text cannot hold U+0000, so it is rejected here as well.

use crate::error::CoreError;

/// Validate a required text field: not blank, no NUL characters and at most
/// `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    validate_max_len(field, value, max)
}

/// Validate an optional text field: when present, no NUL characters and at
/// most `max` characters.
pub fn validate_optional(field: &str, value: Option<&str>, max: usize) -> Result<(), CoreError> {
    match value {
        Some(v) => validate_max_len(field, v, max),
        None => Ok(()),
    }
}

fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} too long: {len} chars (max {max})"
        )));
    }
    Ok(())
}
