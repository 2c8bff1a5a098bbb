//! Integration tests for the shopping-list REST API
//!
//! These tests drive the full router over a temporary data directory and
//! verify:
//! - List load/save round-trips (trimming, empty-item filtering)
//! - Recommended list dedupe and ordering
//! - Reset carryover semantics
//! - PDF export
//! - Error handling for malformed payloads

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt; // for `oneshot`

// Import from the main crate
use shopping_list_rust::list::AppState;
use shopping_list_rust::router::create_app_router;

/// Helper function to create a test app over its own data directory.
/// The TempDir must be kept alive for the duration of the test.
fn create_test_app() -> (axum::Router, TempDir) {
    let data_dir = TempDir::new().expect("create temp data dir");
    let state = Arc::new(AppState::new(data_dir.path().to_path_buf()));
    (create_app_router(state), data_dir)
}

/// Helper function to send a request and get the raw response parts
async fn send_raw_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json_body).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, body_bytes.to_vec())
}

/// Helper function to send a JSON request and get the response
async fn send_rest_request(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, _, body_bytes) = send_raw_request(app, method, uri, body).await;
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));
    (status, body)
}

#[tokio::test]
async fn test_get_list_starts_empty_and_seeds_files() {
    let (app, data_dir) = create_test_app();

    let (status, body) = send_rest_request(&app, "GET", "/api/list", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list"], json!([]));

    // First read seeds header-only CSV files
    assert!(data_dir.path().join("shopping_list.csv").exists());
    assert!(data_dir.path().join("recommended_list.csv").exists());
}

#[tokio::test]
async fn test_save_list_cleans_and_round_trips() {
    let (app, _data_dir) = create_test_app();

    let payload = json!({
        "list": [
            { "item": "  Milk ", "quantity": " 2 ", "category": " Drinks " },
            { "item": "   ", "quantity": "1", "category": "Misc" },
            { "item": "Bread" }
        ]
    });

    let (status, body) = send_rest_request(&app, "POST", "/api/list", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["list"],
        json!([
            { "item": "Milk", "quantity": "2", "category": "Drinks" },
            { "item": "Bread", "quantity": "", "category": "" }
        ])
    );

    // Reading back yields the same cleaned entries
    let (status, body) = send_rest_request(&app, "GET", "/api/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["list"],
        json!([
            { "item": "Milk", "quantity": "2", "category": "Drinks" },
            { "item": "Bread", "quantity": "", "category": "" }
        ])
    );
}

#[tokio::test]
async fn test_save_list_allows_duplicate_items() {
    let (app, _data_dir) = create_test_app();

    let payload = json!({
        "list": [
            { "item": "Milk", "quantity": "1", "category": "" },
            { "item": "Milk", "quantity": "2", "category": "" }
        ]
    });

    let (status, body) = send_rest_request(&app, "POST", "/api/list", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_save_list_rejects_wrong_shape() {
    let (app, _data_dir) = create_test_app();

    let (status, _) =
        send_rest_request(&app, "POST", "/api/list", Some(json!({ "list": "nope" }))).await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_recommended_dedupes_and_sorts_on_read() {
    let (app, _data_dir) = create_test_app();

    // Save deliberately messy items: duplicates differing in case, unsorted
    let payload = json!({
        "items": [
            { "item": "bananas", "category": "" },
            { "item": "Milk", "category": "Drinks" },
            { "item": "MILK", "category": "Dairy" },
            { "item": "Apples", "category": "Produce" }
        ]
    });

    let (status, _) = send_rest_request(&app, "POST", "/api/recommended", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send_rest_request(&app, "GET", "/api/recommended", None).await;

    assert_eq!(status, StatusCode::OK);
    // First occurrence wins the dedupe; output is sorted ignoring case.
    assert_eq!(
        body["items"],
        json!([
            { "item": "Apples", "category": "Produce" },
            { "item": "bananas", "category": "" },
            { "item": "Milk", "category": "Drinks" }
        ])
    );
}

#[tokio::test]
async fn test_reset_moves_list_into_recommended() {
    let (app, _data_dir) = create_test_app();

    // Existing recommended item, with its own casing and category
    let recommended = json!({
        "items": [ { "item": "Milk", "category": "Dairy" } ]
    });
    send_rest_request(&app, "POST", "/api/recommended", Some(recommended)).await;

    // Current list collides on "milk" and adds a new item
    let list = json!({
        "list": [
            { "item": "milk", "quantity": "2", "category": "Drinks" },
            { "item": "Bread", "quantity": "1", "category": "Bakery" }
        ]
    });
    send_rest_request(&app, "POST", "/api/list", Some(list)).await;

    let (status, body) = send_rest_request(&app, "POST", "/api/reset", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list"], json!([]));
    // The pre-existing recommended entry wins the collision
    assert_eq!(
        body["items"],
        json!([
            { "item": "Bread", "category": "Bakery" },
            { "item": "Milk", "category": "Dairy" }
        ])
    );

    // The list is now empty and the merge is persisted
    let (_, body) = send_rest_request(&app, "GET", "/api/list", None).await;
    assert_eq!(body["list"], json!([]));

    let (_, body) = send_rest_request(&app, "GET", "/api/recommended", None).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_reset_with_empty_list_keeps_recommended() {
    let (app, _data_dir) = create_test_app();

    let recommended = json!({
        "items": [ { "item": "Eggs", "category": "" } ]
    });
    send_rest_request(&app, "POST", "/api/recommended", Some(recommended)).await;

    let (status, body) = send_rest_request(&app, "POST", "/api/reset", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["list"], json!([]));
    assert_eq!(body["items"], json!([ { "item": "Eggs", "category": "" } ]));
}

#[tokio::test]
async fn test_export_pdf_returns_pdf_bytes() {
    let (app, _data_dir) = create_test_app();

    let payload = json!({
        "list": [
            { "item": "Milk", "quantity": "2", "category": "Drinks" },
            { "item": "Chips", "quantity": "", "category": "" }
        ]
    });

    let (status, headers, body) =
        send_raw_request(&app, "POST", "/api/export/pdf", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(
        headers
            .get("content-disposition")
            .unwrap()
            .to_str()
            .unwrap(),
        "attachment; filename=\"shopping-list.pdf\""
    );
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_export_pdf_empty_list_succeeds() {
    let (app, _data_dir) = create_test_app();

    let (status, headers, body) =
        send_raw_request(&app, "POST", "/api/export/pdf", Some(json!({ "list": [] }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "application/pdf"
    );
    assert!(body.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_data_dirs_are_isolated_per_app() {
    let (app1, _dir1) = create_test_app();
    let (app2, _dir2) = create_test_app();

    let payload = json!({
        "list": [ { "item": "Milk", "quantity": "1", "category": "" } ]
    });
    send_rest_request(&app1, "POST", "/api/list", Some(payload)).await;

    let (_, body) = send_rest_request(&app2, "GET", "/api/list", None).await;
    assert_eq!(body["list"], json!([]));
}
