//! Handlers for registration, login, and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use guestline_core::error::CoreError;
use guestline_core::roles::normalize_role_name;
use guestline_core::types::DbId;
use guestline_core::validation::validate_email;
use guestline_db::models::user::{CreateUser, User, UserResponse};
use guestline_db::repositories::{RoleRepo, SessionRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::{generate_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /register`.
///
/// Fields are optional at the serde level so missing input surfaces as a
/// domain validation error rather than a deserialization failure. The role
/// may be given as `role_id` or as a `role` name, which is normalized
/// before lookup.
#[derive(Debug, serde::Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<DbId>,
    pub role: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, serde::Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /register
///
/// Create a user with a freshly hashed credential and open a session for
/// it. Returns 201 with the public user projection; the credential never
/// leaves the server.
///
/// Both username and password are required. (The system this replaces
/// rejected on `!username || password`, which failed every request that
/// carried a password; the corrected conjunction is intended behaviour.)
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    // Usernames are stored byte-exact; lookup is a case-sensitive exact
    // match, so no trimming or case folding happens here.
    let username = input.username.as_deref().unwrap_or("");
    let password = input.password.as_deref().unwrap_or("");
    if username.is_empty() || password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Please provide a username and a password".into(),
        )));
    }

    let email = input.email.as_deref().unwrap_or("");
    validate_email(email)?;

    let role = resolve_role(&state, input.role_id, input.role.as_deref()).await?;

    // Friendly pre-check; `uq_users_username` catches the concurrent case.
    if UserRepo::find_by_username(&state.pool, username).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{username}' is already taken"
        ))));
    }

    let password_hash = hash_password(password)?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role_id: role,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let jar = open_session(&state, &user, jar).await?;
    Ok((StatusCode::CREATED, jar, Json(UserResponse::from(&user))))
}

/// POST /login
///
/// Authenticate with username + password. A missing field is a 400 (the
/// request is malformed), a failed credential check is a 401. On success
/// the session cookie is set and the user projection returned.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(username), Some(password)) = (input.username.as_deref(), input.password.as_deref())
    else {
        return Err(AppError::BadRequest("Missing username or password".into()));
    };
    if username.is_empty() || password.is_empty() {
        return Err(AppError::BadRequest("Missing username or password".into()));
    }

    let user = UserRepo::find_by_username(&state.pool, username).await?;

    // Verify against the stored hash; an unknown user fails the same way
    // as a wrong password so the response does not enumerate usernames.
    let password_valid = user
        .as_ref()
        .map(|u| verify_password(password, &u.password_hash))
        .unwrap_or(false);

    let Some(user) = user.filter(|_| password_valid) else {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        )));
    };

    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    let jar = open_session(&state, &user, jar).await?;
    Ok((StatusCode::OK, jar, Json(UserResponse::from(&user))))
}

/// DELETE /logout
///
/// Revoke the presented session and clear the cookie. Requires an active
/// session (401 otherwise). Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    auth_user: AuthUser,
    jar: CookieJar,
) -> AppResult<impl IntoResponse> {
    let revoked = SessionRepo::revoke(&state.pool, auth_user.session_id).await?;
    if !revoked {
        return Err(AppError::Core(CoreError::Unauthorized(
            "No active session".into(),
        )));
    }

    tracing::info!(user_id = auth_user.user_id, "User logged out");

    let jar = jar.remove(Cookie::from(SESSION_COOKIE));
    Ok((jar, StatusCode::NO_CONTENT))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the requested role to its ID.
///
/// `role_id` wins when both forms are supplied; a bare `role` name is
/// normalized (trimmed, lowercased, restricted to the enumerated set)
/// before lookup.
async fn resolve_role(
    state: &AppState,
    role_id: Option<DbId>,
    role_name: Option<&str>,
) -> AppResult<DbId> {
    if let Some(id) = role_id {
        let role = RoleRepo::find_by_id(&state.pool, id).await?.ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "role_id {id} does not reference an existing role"
            )))
        })?;
        return Ok(role.id);
    }

    if let Some(name) = role_name {
        let normalized = normalize_role_name(name)?;
        let role = RoleRepo::find_by_name(&state.pool, &normalized)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!("Seeded role '{normalized}' is missing"))
            })?;
        return Ok(role.id);
    }

    Err(AppError::Core(CoreError::Validation(
        "role_id is required".into(),
    )))
}

/// Create a session row for the user and add the session cookie to the jar.
async fn open_session(state: &AppState, user: &User, jar: CookieJar) -> AppResult<CookieJar> {
    let (token, token_hash) = generate_session_token();
    SessionRepo::create(&state.pool, user.id, &token_hash).await?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    Ok(jar.add(cookie))
}
