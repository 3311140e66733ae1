//! Route definitions for registration, login, and logout.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// POST   /register -> register
/// POST   /login    -> login
/// DELETE /logout   -> logout (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", delete(auth::logout))
}
