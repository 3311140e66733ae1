//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use guestline_core::error::CoreError;
use guestline_core::types::DbId;
use guestline_db::repositories::SessionRepo;

use crate::auth::token::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user resolved from a server-side session.
///
/// The session token is read from the `guestline_session` cookie or an
/// `Authorization: Bearer` header, hashed, and looked up in the `sessions`
/// table. Use this as an extractor parameter in any handler that requires
/// an active session:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The session row backing this identity (revoked on logout).
    pub session_id: DbId,
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
    /// The user's role name (`"admin"` or `"user"`).
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("No active session".into()))
        })?;

        let identity = SessionRepo::resolve_identity(&state.pool, &hash_session_token(&token))
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("No active session".into()))
            })?;

        Ok(AuthUser {
            session_id: identity.session_id,
            user_id: identity.user_id,
            username: identity.username,
            role: identity.role,
        })
    }
}

/// Pull the session token from the cookie jar, falling back to a Bearer
/// header for non-browser clients.
fn extract_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}
