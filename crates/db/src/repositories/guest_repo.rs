//! Repository for the `guests` table.

use guestline_core::types::DbId;
use sqlx::PgPool;

use crate::models::guest::{CreateGuest, Guest, UpdateGuest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, user_id, name, email, rsvp_status, created_at, updated_at";

/// Provides CRUD operations for guests.
pub struct GuestRepo;

impl GuestRepo {
    /// Insert a new guest, returning the created row.
    ///
    /// Callers validate that `event_id` and `user_id` reference existing
    /// rows before inserting; the foreign-key constraints are the backstop.
    pub async fn create(pool: &PgPool, input: &CreateGuest) -> Result<Guest, sqlx::Error> {
        let query = format!(
            "INSERT INTO guests (event_id, user_id, name, email, rsvp_status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(input.event_id)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(input.rsvp_status)
            .fetch_one(pool)
            .await
    }

    /// Find a guest by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests WHERE id = $1");
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all guests.
    ///
    /// Ordered by ID for stable output, but callers must not treat the
    /// ordering as an invariant.
    pub async fn list(pool: &PgPool) -> Result<Vec<Guest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guests ORDER BY id ASC");
        sqlx::query_as::<_, Guest>(&query).fetch_all(pool).await
    }

    /// Merge-patch update. Only fields present in `input` are applied;
    /// omitted fields retain their prior value.
    ///
    /// `name` and `email` use `COALESCE`. `rsvp_status` is nullable, so it
    /// is driven by a separate applied-flag bind: an explicit `null` in the
    /// patch clears the stored value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGuest,
    ) -> Result<Option<Guest>, sqlx::Error> {
        let (rsvp_applied, rsvp_value) = match input.rsvp_status {
            Some(value) => (true, value),
            None => (false, None),
        };
        let query = format!(
            "UPDATE guests SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                rsvp_status = CASE WHEN $4 THEN $5 ELSE rsvp_status END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Guest>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(rsvp_applied)
            .bind(rsvp_value)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a guest. Returns `true` if a row was removed.
    ///
    /// Deleting an already-removed ID returns `false`; the caller maps
    /// that to a not-found error rather than a silent success.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
