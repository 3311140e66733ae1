//! Guest entity model and DTOs.

use guestline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A guest row from the `guests` table.
///
/// `rsvp_status` is tri-state: `None` means no response yet, `Some(true)`
/// accepted, `Some(false)` declined.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub rsvp_status: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new guest.
#[derive(Debug)]
pub struct CreateGuest {
    pub event_id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub email: String,
    pub rsvp_status: Option<bool>,
}

/// DTO for merge-patch updates. Omitted fields retain their prior value.
///
/// `rsvp_status` uses a double `Option` to distinguish "field absent"
/// (outer `None`, keep the current value) from an explicit JSON `null`
/// (outer `Some(None)`, clear the response).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateGuest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub rsvp_status: Option<Option<bool>>,
}

/// Deserialize a present-but-possibly-null field into `Some(inner)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}
