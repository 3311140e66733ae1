//! Handlers for the `/guests` resource.
//!
//! All endpoints require an active session. Creation checks that the
//! referenced event and user exist before inserting; updates use
//! merge-patch semantics (omitted fields keep their prior value).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use guestline_core::error::CoreError;
use guestline_core::types::DbId;
use guestline_core::validation::{require_non_empty, validate_email};
use guestline_db::models::guest::{CreateGuest, UpdateGuest};
use guestline_db::repositories::{EventRepo, GuestRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /guests`.
///
/// Required fields are optional at the serde level so missing input
/// surfaces as a domain validation error rather than a deserialization
/// failure.
#[derive(Debug, serde::Deserialize)]
pub struct CreateGuestRequest {
    pub event_id: Option<DbId>,
    pub user_id: Option<DbId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub rsvp_status: Option<bool>,
}

/// Request body for `DELETE /guests` (delete by id in the body).
#[derive(Debug, serde::Deserialize)]
pub struct DeleteGuestRequest {
    pub id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /guests
///
/// List all guests. Ordering is not part of the contract.
pub async fn list_guests(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let guests = GuestRepo::list(&state.pool).await?;
    Ok(Json(guests))
}

/// POST /guests
///
/// Create a guest. The referenced event and user must exist (404 for a
/// dangling reference); name and email are validated (422).
pub async fn create_guest(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGuestRequest>,
) -> AppResult<impl IntoResponse> {
    let event_id = input
        .event_id
        .ok_or_else(|| CoreError::Validation("event_id is required".into()))?;
    let user_id = input
        .user_id
        .ok_or_else(|| CoreError::Validation("user_id is required".into()))?;

    let name = input.name.as_deref().unwrap_or("");
    require_non_empty("name", name)?;
    let email = input.email.as_deref().unwrap_or("");
    validate_email(email)?;

    // Reference checks precede the insert so a dangling id is reported as
    // a not-found on the referent, not a constraint failure.
    if EventRepo::find_by_id(&state.pool, event_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Reference {
            entity: "Event",
            id: event_id,
        }));
    }
    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        return Err(AppError::Core(CoreError::Reference {
            entity: "User",
            id: user_id,
        }));
    }

    let guest = GuestRepo::create(
        &state.pool,
        &CreateGuest {
            event_id,
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            rsvp_status: input.rsvp_status,
        },
    )
    .await?;

    tracing::info!(guest_id = guest.id, event_id, user_id = auth.user_id, "Guest created");

    Ok((StatusCode::CREATED, Json(guest)))
}

/// GET /guests/{id}
pub async fn get_guest(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let guest = GuestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Guest", id }))?;
    Ok(Json(guest))
}

/// PATCH /guests/{id}
///
/// Merge-patch update: each of name, email, and rsvp_status changes only
/// when explicitly supplied. An explicit `"rsvp_status": null` clears the
/// response. Email is re-validated when supplied.
pub async fn update_guest(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGuest>,
) -> AppResult<impl IntoResponse> {
    if let Some(name) = input.name.as_deref() {
        require_non_empty("name", name)?;
    }
    if let Some(email) = input.email.as_deref() {
        validate_email(email)?;
    }

    let guest = GuestRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Guest", id }))?;

    tracing::info!(guest_id = id, user_id = auth.user_id, "Guest updated");

    Ok(Json(guest))
}

/// DELETE /guests/{id}
///
/// Permanent removal. A repeat delete of the same id is a 404, not a
/// silent success.
pub async fn delete_guest(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    delete_by_id(&state, &auth, id).await
}

/// DELETE /guests
///
/// Body-addressed variant: deletes the guest named by `{"id": ...}`.
pub async fn delete_guest_by_body(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<DeleteGuestRequest>,
) -> AppResult<impl IntoResponse> {
    let id = input
        .id
        .ok_or_else(|| CoreError::Validation("id is required".into()))?;
    delete_by_id(&state, &auth, id).await
}

async fn delete_by_id(state: &AppState, auth: &AuthUser, id: DbId) -> AppResult<StatusCode> {
    let deleted = GuestRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Guest", id }));
    }

    tracing::info!(guest_id = id, user_id = auth.user_id, "Guest deleted");

    Ok(StatusCode::NO_CONTENT)
}
