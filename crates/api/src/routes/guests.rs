//! Route definitions for the `/guests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::guests;
use crate::state::AppState;

/// Routes mounted at `/guests`.
///
/// ```text
/// GET    /      -> list_guests
/// POST   /      -> create_guest
/// DELETE /      -> delete_guest_by_body (id in body)
/// GET    /{id}  -> get_guest
/// PATCH  /{id}  -> update_guest
/// DELETE /{id}  -> delete_guest
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(guests::list_guests)
                .post(guests::create_guest)
                .delete(guests::delete_guest_by_body),
        )
        .route(
            "/{id}",
            get(guests::get_guest)
                .patch(guests::update_guest)
                .delete(guests::delete_guest),
        )
}
