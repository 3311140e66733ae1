//! Handlers for the `/events` resource.
//!
//! Events are bare identifiers; these endpoints exist so guests have a
//! valid referent to attach to. All endpoints require an active session.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use guestline_db::repositories::EventRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /events
///
/// Create a bare event and return it with 201 Created.
pub async fn create_event(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::create(&state.pool).await?;

    tracing::info!(event_id = event.id, user_id = auth.user_id, "Event created");

    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /events
///
/// List all events.
pub async fn list_events(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let events = EventRepo::list(&state.pool).await?;
    Ok(Json(events))
}
