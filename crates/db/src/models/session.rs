//! User session model.

use guestline_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// Only the SHA-256 hash of the opaque session token is stored, so a
/// database leak does not expose live sessions. No expiry or rotation is
/// modeled; revocation is the only lifecycle transition.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// The identity a valid session token resolves to: the session itself plus
/// the owning user and their role name, joined in a single query.
#[derive(Debug, Clone, FromRow)]
pub struct SessionIdentity {
    pub session_id: DbId,
    pub user_id: DbId,
    pub username: String,
    pub role: String,
}
