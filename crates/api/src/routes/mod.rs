pub mod auth;
pub mod events;
pub mod guests;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Routes are mounted at the root (no version prefix) to preserve the
/// public surface of the system this replaces:
///
/// ```text
/// POST   /register           register (public)
/// POST   /login              login (public)
/// DELETE /logout             logout (requires session)
///
/// POST   /events             create event
/// GET    /events             list events
///
/// GET    /guests             list guests
/// POST   /guests             create guest
/// DELETE /guests             delete guest (id in body)
/// GET    /guests/{id}        get guest
/// PATCH  /guests/{id}        update guest (merge-patch)
/// DELETE /guests/{id}        delete guest
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/events", events::router())
        .nest("/guests", guests::router())
}
