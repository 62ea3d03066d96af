//! Integration tests for `POST /api/feedback`.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, post_json, raw_request, send, MemoryStore};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: valid feedback is stored and acknowledged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_feedback_is_stored() {
    let store = MemoryStore::new();
    let app = build_test_app(None, Some(store.clone()));

    let (status, json) = post_json(
        app,
        "/api/feedback",
        json!({ "name": "Ana", "email": "ana@example.com", "message": "Love it", "type": "feature" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "success": true, "message": "Feedback received successfully" })
    );

    let rows = store.feedback();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Ana");
    assert_eq!(rows[0].email, "ana@example.com");
    assert_eq!(rows[0].message, "Love it");
    assert_eq!(rows[0].kind, "feature");
}

// ---------------------------------------------------------------------------
// Test: absent or unknown type falls back to "feedback"
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_type_defaults_to_feedback() {
    let store = MemoryStore::new();

    for body in [
        json!({ "name": "A", "email": "a@x.io", "message": "hi" }),
        json!({ "name": "A", "email": "a@x.io", "message": "hi", "type": "complaint" }),
    ] {
        let app = build_test_app(None, Some(store.clone()));
        let (status, _) = post_json(app, "/api/feedback", body).await;
        assert_eq!(status, StatusCode::OK);
    }

    let kinds: Vec<String> = store.feedback().into_iter().map(|f| f.kind).collect();
    assert_eq!(kinds, vec!["feedback", "feedback"]);
}

// ---------------------------------------------------------------------------
// Test: missing fields are rejected and nothing is stored
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_return_400() {
    let store = MemoryStore::new();

    for body in [
        json!({ "email": "a@x.io", "message": "hi" }),
        json!({ "name": "A", "message": "hi" }),
        json!({ "name": "A", "email": "a@x.io", "message": "" }),
    ] {
        let app = build_test_app(None, Some(store.clone()));
        let (status, json) = post_json(app, "/api/feedback", body.clone()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(
            json["error"],
            "Missing required fields: name, email, and message are required"
        );
    }

    assert!(store.feedback().is_empty());
}

// ---------------------------------------------------------------------------
// Test: storage failures are logged, not surfaced
// ---------------------------------------------------------------------------

#[tokio::test]
async fn storage_failure_still_acknowledges() {
    let app = build_test_app(None, Some(MemoryStore::failing()));

    let (status, json) = post_json(
        app,
        "/api/feedback",
        json!({ "name": "A", "email": "a@x.io", "message": "hi", "type": "bug" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
}

#[tokio::test]
async fn degraded_mode_still_acknowledges() {
    let app = build_test_app(None, None);

    let (status, json) = post_json(
        app,
        "/api/feedback",
        json!({ "name": "A", "email": "a@x.io", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Feedback received successfully");
}

// ---------------------------------------------------------------------------
// Test: form bodies and type mismatches
// ---------------------------------------------------------------------------

#[tokio::test]
async fn form_encoded_feedback_is_stored() {
    let store = MemoryStore::new();
    let app = build_test_app(None, Some(store.clone()));

    let (status, json) = send(
        app,
        raw_request(
            "/api/feedback",
            Some("application/x-www-form-urlencoded"),
            "name=Ana&email=ana%40example.com&message=Great%20app&type=support",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let rows = store.feedback();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].email, "ana@example.com");
    assert_eq!(rows[0].message, "Great app");
    assert_eq!(rows[0].kind, "support");
}

#[tokio::test]
async fn missing_content_type_is_missing_fields() {
    let app = build_test_app(None, Some(MemoryStore::new()));

    let (status, json) = send(
        app,
        raw_request(
            "/api/feedback",
            None,
            r#"{"name":"A","email":"a@x.io","message":"hi"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "Missing required fields: name, email, and message are required"
    );
}

#[tokio::test]
async fn wrongly_typed_field_returns_500() {
    let store = MemoryStore::new();
    let app = build_test_app(None, Some(store.clone()));

    let (status, json) = post_json(
        app,
        "/api/feedback",
        json!({ "name": ["A"], "email": "a@x.io", "message": "hi" }),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Failed to save feedback");
    assert!(json["message"].is_string());
    assert!(store.feedback().is_empty());
}
