//! Route definitions for the `/events` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

/// Routes mounted at `/events`.
///
/// ```text
/// POST /  -> create_event
/// GET  /  -> list_events
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(events::list_events).post(events::create_event))
}
