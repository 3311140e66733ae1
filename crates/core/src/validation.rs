//! Field validation rules shared by user registration and the guest ledger.

use crate::error::CoreError;

/// Validate an email address.
///
/// The rule is deliberately minimal: the address must contain an `@`
/// separator. Anything stricter belongs to a mail-delivery concern, not
/// this system.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(CoreError::Validation("Invalid email".to_string()))
    }
}

/// Require a field to be present and non-empty after trimming.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}
