//! Event entity model.

use guestline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An event row from the `events` table.
///
/// Events carry a bare identifier only; attribute management is out of
/// scope. The row exists so guests have a valid referent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub created_at: Timestamp,
}
