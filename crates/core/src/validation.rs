//! Field-level validation helpers for incoming payloads.
//!
//! Each helper returns [`CoreError::Validation`] with a message naming the
//! offending field, so handlers can surface it to the client unchanged.

use crate::error::CoreError;

/// Reject empty or whitespace-only strings.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(())
}

/// Reject negative, NaN, or infinite amounts.
pub fn validate_amount(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

/// Reject negative unit counts.
pub fn validate_unit_count(field: &str, value: i32) -> Result<(), CoreError> {
    if value < 0 {
        return Err(CoreError::Validation(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

/// A rental must ask for at least one unit.
pub fn validate_quantity(quantity: i32) -> Result<(), CoreError> {
    if quantity < 1 {
        return Err(CoreError::Validation(format!(
            "quantity must be at least 1, got {quantity}"
        )));
    }
    Ok(())
}
