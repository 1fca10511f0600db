//! Field rules for classes.

use crate::error::CoreError;
use crate::text;

/// Maximum length for a class name.
pub const MAX_CLASS_NAME_LEN: usize = 100;

/// Maximum length for a class description.
pub const MAX_CLASS_DESCRIPTION_LEN: usize = 500;

/// Validate a class name: non-blank and within length limit.
pub fn validate_class_name(name: &str) -> Result<(), CoreError> {
    text::validate_required("name", name, MAX_CLASS_NAME_LEN)
}

/// Validate an optional class description.
pub fn validate_class_description(description: Option<&str>) -> Result<(), CoreError> {
    text::validate_optional("description", description, MAX_CLASS_DESCRIPTION_LEN)
}

/// Validate all writable class fields.
pub fn validate_class(name: &str, description: Option<&str>) -> Result<(), CoreError> {
    validate_class_name(name)?;
    validate_class_description(description)
}
