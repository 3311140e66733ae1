//! Role entity model.

use guestline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A role row from the `roles` table.
///
/// Roles are static reference data seeded by migration; ordinary request
/// flow never creates or destroys them.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
