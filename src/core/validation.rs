//! Input validation for secret operations.
//!
//! Mirrors the rules the service enforces so bad input fails before a
//! network round trip.

use crate::core::constants::{MAX_KEY_LEN, MAX_VALUE_LEN};
use crate::error::{Result, ValidationError};

fn invalid_key(key: &str, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidKey {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Validate a secret key name.
///
/// Secret keys must be:
/// - Only A-Z, 0-9, and underscore
/// - At most [`MAX_KEY_LEN`] characters
/// - Free of leading, trailing, or doubled underscores
///
/// # Errors
///
/// Returns `ValidationError` if the key is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if key.len() > MAX_KEY_LEN {
        return Err(invalid_key(key, format!("must be at most {} characters", MAX_KEY_LEN)).into());
    }

    for (i, ch) in key.chars().enumerate() {
        if !(ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_') {
            return Err(invalid_key(
                key,
                format!(
                    "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            )
            .into());
        }
    }

    if key.starts_with('_') || key.ends_with('_') {
        return Err(invalid_key(key, "cannot start or end with an underscore").into());
    }

    if key.contains("__") {
        return Err(invalid_key(key, "cannot contain consecutive underscores").into());
    }

    Ok(())
}

/// Validate a secret value.
///
/// # Errors
///
/// Returns `ValidationError` if the value is empty or too long.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()).into());
    }

    if value.chars().count() > MAX_VALUE_LEN {
        return Err(ValidationError::ValueTooLong {
            key: key.to_string(),
            max: MAX_VALUE_LEN,
        }
        .into());
    }

    Ok(())
}

/// Validate a user-supplied name (organization or project).
///
/// # Errors
///
/// Returns `ValidationError::EmptyName` for blank input.
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    Ok(())
}
