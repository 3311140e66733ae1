//! Repository for the `sessions` table.

use guestline_core::types::DbId;
use sqlx::PgPool;

use crate::models::session::{Session, SessionIdentity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, token_hash, is_revoked, created_at";

/// Provides operations for server-side sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session for a user, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        token_hash: &str,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(user_id)
            .bind(token_hash)
            .fetch_one(pool)
            .await
    }

    /// Resolve an active (non-revoked) session token hash to the owning
    /// user and their role name.
    pub async fn resolve_identity(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<SessionIdentity>, sqlx::Error> {
        sqlx::query_as::<_, SessionIdentity>(
            "SELECT s.id AS session_id, u.id AS user_id, u.username, r.name AS role
             FROM sessions s
             JOIN users u ON u.id = s.user_id
             JOIN roles r ON r.id = u.role_id
             WHERE s.token_hash = $1 AND s.is_revoked = false",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE sessions SET is_revoked = true WHERE id = $1 AND is_revoked = false")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
