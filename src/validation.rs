//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are applied
//! here before any write.

use crate::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, category
pub const MAX_NAME_LEN: usize = 100;

/// Descriptions
pub const MAX_DESCRIPTION_LEN: usize = 2000;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a monetary amount is strictly positive.
pub fn validate_positive_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

/// Validate that a count is strictly positive.
pub fn validate_positive_count(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!("{field} must be positive")));
    }
    Ok(())
}

/// Validate that a count is not negative.
pub fn validate_non_negative_count(value: i64, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_required_text() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Electronics", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn rejects_over_long_text() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "description", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&None, "description", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn rejects_non_positive_amounts() {
        assert!(validate_positive_amount(0.0, "price").is_err());
        assert!(validate_positive_amount(-1.5, "price").is_err());
        assert!(validate_positive_amount(f64::NAN, "price").is_err());
        assert!(validate_positive_amount(99.99, "price").is_ok());
    }

    #[test]
    fn count_bounds() {
        assert!(validate_positive_count(0, "quantity").is_err());
        assert!(validate_positive_count(3, "quantity").is_ok());
        assert!(validate_non_negative_count(0, "quantity").is_ok());
        assert!(validate_non_negative_count(-1, "quantity").is_err());
    }
}
