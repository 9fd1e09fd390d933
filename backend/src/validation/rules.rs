//! Common validation rules shared across request payloads.

use validator::ValidationError;

/// Validates nickname format.
///
/// Requirements:
/// - Only ASCII letters
/// - At least one character
pub fn validate_alphabetic(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new("alphabetic_empty"));
    }

    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new("alphabetic_invalid_characters"));
    }

    Ok(())
}
