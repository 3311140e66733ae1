//! Well-known role name constants and role-name normalization.
//!
//! The constants must match the seed data in
//! `20260301000001_create_roles_table.sql`.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";

/// Normalize a role name: trim surrounding whitespace and lowercase.
///
/// Only the enumerated set `{"admin", "user"}` is accepted; anything else
/// is a validation error.
pub fn normalize_role_name(name: &str) -> Result<String, CoreError> {
    let normalized = name.trim().to_lowercase();
    if normalized == ROLE_ADMIN || normalized == ROLE_USER {
        Ok(normalized)
    } else {
        Err(CoreError::Validation(format!(
            "Role name must be either '{ROLE_USER}' or '{ROLE_ADMIN}'"
        )))
    }
}
