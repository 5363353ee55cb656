//! Client-side form validation.
//!
//! Validation is deliberately minimal: required fields must be non-blank,
//! money amounts must parse as positive numbers, and invitation emails must
//! be syntactically valid. Everything else is the backend's responsibility.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Return the trimmed value, or a validation error naming the field.
pub fn require_non_empty(value: &str, field: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required.")));
    }
    Ok(trimmed.to_string())
}

/// Parse a money amount typed into a form field.
///
/// Rejects blanks, non-numbers, non-finite values and anything `<= 0`.
pub fn parse_positive_amount(raw: &str, message: &str) -> Result<f64, CoreError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}

/// Validate an already-numeric amount (e.g. a preset booking price).
pub fn require_positive(value: f64, message: &str) -> Result<f64, CoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CoreError::Validation(message.to_string()))
    }
}

/// Validate and normalise an email address.
pub fn validate_email(raw: &str) -> Result<String, CoreError> {
    let email = require_non_empty(raw, "Email")?;
    if !email.validate_email() {
        return Err(CoreError::Validation(
            "Please enter a valid email address.".to_string(),
        ));
    }
    Ok(email)
}
