//! Repository for the `events` table.

use guestline_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::Event;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at";

/// Provides operations for events. Events are bare identifiers; the only
/// writes are inserts.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool) -> Result<Event, sqlx::Error> {
        let query = format!("INSERT INTO events DEFAULT VALUES RETURNING {COLUMNS}");
        sqlx::query_as::<_, Event>(&query).fetch_one(pool).await
    }

    /// Find an event by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY id ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }
}
