//! HTTP-level integration tests for the event and guest endpoints.

mod common;

use axum::http::StatusCode;
use axum::Router;
use common::{
    body_json, delete_auth, delete_json_auth, get_auth, patch_json_auth, post_json_auth,
    register_user,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a host, create an event, and return
/// `(user_id, event_id, session_token)`.
async fn setup_host_and_event(app: Router) -> (i64, i64, String) {
    let (user_id, token) = register_user(app.clone(), "host", "pw1").await;

    let response = post_json_auth(app, "/events", serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let event_id = json["id"].as_i64().expect("event id must be numeric");

    (user_id, event_id, token)
}

/// Create a guest and return its id.
async fn create_guest(app: Router, event_id: i64, user_id: i64, token: &str) -> i64 {
    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "name": "bob",
        "email": "bob@test.com",
    });
    let response = post_json_auth(app, "/guests", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().expect("guest id must be numeric")
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Events are bare identifiers; create and list round-trip.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_event_create_and_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, event_id, token) = setup_host_and_event(app.clone()).await;

    let response = get_auth(app, "/events", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let events = json.as_array().expect("response must be a list");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"].as_i64(), Some(event_id));
}

// ---------------------------------------------------------------------------
// Guest creation
// ---------------------------------------------------------------------------

/// A created guest echoes its real fields back; in particular the email
/// field carries the email, not the name.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_guest(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;

    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "name": "bob",
        "email": "bob@test.com",
        "rsvp_status": true,
    });
    let response = post_json_auth(app.clone(), "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "bob");
    assert_eq!(created["email"], "bob@test.com");
    assert_eq!(created["rsvp_status"], true);
    assert_eq!(created["event_id"].as_i64(), Some(event_id));
    assert_eq!(created["user_id"].as_i64(), Some(user_id));

    let id = created["id"].as_i64().unwrap();
    let response = get_auth(app, &format!("/guests/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched, created);
}

/// An omitted rsvp_status is stored and reported as null (no response yet).
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_guest_without_rsvp(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;

    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "name": "bob",
        "email": "bob@test.com",
    });
    let response = post_json_auth(app, "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["rsvp_status"].is_null());
}

/// A dangling event reference fails with 404 and writes no row.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_guest_dangling_event(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, _, token) = setup_host_and_event(app.clone()).await;

    let body = serde_json::json!({
        "event_id": 4242,
        "user_id": user_id,
        "name": "bob",
        "email": "bob@test.com",
    });
    let response = post_json_auth(app.clone(), "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_auth(app, "/guests", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

/// A dangling user reference fails with 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_guest_dangling_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, event_id, token) = setup_host_and_event(app.clone()).await;

    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": 4242,
        "name": "bob",
        "email": "bob@test.com",
    });
    let response = post_json_auth(app, "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Name and email are validated on creation.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_guest_invalid_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;

    // Email without the separator.
    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "name": "bob",
        "email": "bobtest.com",
    });
    let response = post_json_auth(app.clone(), "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Missing name.
    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "email": "bob@test.com",
    });
    let response = post_json_auth(app, "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Guest update (merge-patch)
// ---------------------------------------------------------------------------

/// Patching one field leaves the others byte-identical.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_changes_only_supplied_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    let id = create_guest(app.clone(), event_id, user_id, &token).await;

    let before = body_json(get_auth(app.clone(), &format!("/guests/{id}"), &token).await).await;

    let patch = serde_json::json!({ "name": "X" });
    let response = patch_json_auth(app, &format!("/guests/{id}"), patch, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let after = body_json(response).await;

    assert_eq!(after["name"], "X");
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["rsvp_status"], before["rsvp_status"]);
}

/// RSVP transitions: set, change, and clear with an explicit null.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_rsvp_transitions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    let id = create_guest(app.clone(), event_id, user_id, &token).await;
    let uri = format!("/guests/{id}");

    let response =
        patch_json_auth(app.clone(), &uri, serde_json::json!({ "rsvp_status": true }), &token)
            .await;
    assert_eq!(body_json(response).await["rsvp_status"], true);

    let response =
        patch_json_auth(app.clone(), &uri, serde_json::json!({ "rsvp_status": false }), &token)
            .await;
    assert_eq!(body_json(response).await["rsvp_status"], false);

    // Explicit null reverts the guest to "no response yet".
    let response =
        patch_json_auth(app.clone(), &uri, serde_json::json!({ "rsvp_status": null }), &token)
            .await;
    assert!(body_json(response).await["rsvp_status"].is_null());

    // A patch that omits rsvp_status leaves it untouched.
    let response =
        patch_json_auth(app.clone(), &uri, serde_json::json!({ "rsvp_status": true }), &token)
            .await;
    assert_eq!(body_json(response).await["rsvp_status"], true);
    let response =
        patch_json_auth(app, &uri, serde_json::json!({ "name": "Y" }), &token).await;
    assert_eq!(body_json(response).await["rsvp_status"], true);
}

/// A supplied email is re-validated on patch.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_revalidates_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    let id = create_guest(app.clone(), event_id, user_id, &token).await;

    let patch = serde_json::json!({ "email": "invalid" });
    let response = patch_json_auth(app, &format!("/guests/{id}"), patch, &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Patching a nonexistent guest is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_missing_guest(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, _, token) = setup_host_and_event(app.clone()).await;

    let patch = serde_json::json!({ "name": "X" });
    let response = patch_json_auth(app, "/guests/9999", patch, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Guest deletion
// ---------------------------------------------------------------------------

/// First delete succeeds with 204; the second is a 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_guest_twice(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    let id = create_guest(app.clone(), event_id, user_id, &token).await;
    let uri = format!("/guests/{id}");

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The body-addressed delete variant removes the guest named by `id`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_guest_by_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    let id = create_guest(app.clone(), event_id, user_id, &token).await;

    let response =
        delete_json_auth(app.clone(), "/guests", serde_json::json!({ "id": id }), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Missing id is a validation error, not a not-found.
    let response = delete_json_auth(app, "/guests", serde_json::json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

/// Listing returns every guest that exists.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_guests(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (user_id, event_id, token) = setup_host_and_event(app.clone()).await;
    create_guest(app.clone(), event_id, user_id, &token).await;

    let body = serde_json::json!({
        "event_id": event_id,
        "user_id": user_id,
        "name": "carol",
        "email": "carol@test.com",
    });
    let response = post_json_auth(app.clone(), "/guests", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, "/guests", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}
