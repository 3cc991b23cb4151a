//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use puzzle_core::clock::Clock;
use puzzle_core::repository::ImageStore;
use puzzle_gallery::domain::upload::UploadLimits;
use puzzle_image_store::memory_image_store::InMemoryImageStore;
use puzzle_test_support::{FixedClock, fixed_now};
use tower::ServiceExt;

use puzzle_api::config::DEFAULT_MAX_BODY_BYTES;
use puzzle_api::state::AppState;

/// Build the full app router over a fresh in-memory store.
pub fn build_test_app() -> (Router, Arc<InMemoryImageStore>) {
    let store = Arc::new(InMemoryImageStore::new());
    (build_test_app_with_store(store.clone()), store)
}

/// Build the full app router over `store` with a fixed clock. Uses the same
/// route structure and default body cap as `main.rs`.
pub fn build_test_app_with_store(store: Arc<dyn ImageStore>) -> Router {
    build_test_app_with_body_limit(store, DEFAULT_MAX_BODY_BYTES)
}

/// Build the full app router over `store` with a custom body cap.
pub fn build_test_app_with_body_limit(store: Arc<dyn ImageStore>, max_body_bytes: usize) -> Router {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(fixed_now()));
    puzzle_api::app(
        AppState::new(clock, store, UploadLimits::default()),
        max_body_bytes,
    )
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a JSON body and return only the status. Used
/// where the response body is not JSON.
pub async fn post_json_status(app: Router, uri: &str, body: &serde_json::Value) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    app.oneshot(request).await.unwrap().status()
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// JSON upload body with `count` unlabeled pieces and an optional composite.
pub fn upload_body(count: usize, composite_label: Option<&str>) -> serde_json::Value {
    let images: Vec<_> = (1..=count)
        .map(|n| serde_json::json!({ "data": format!("data:image/png;base64,P{n}") }))
        .collect();
    match composite_label {
        Some(label) => serde_json::json!({
            "images": images,
            "composite": { "data": "data:image/png;base64,FULL", "label": label }
        }),
        None => serde_json::json!({ "images": images }),
    }
}
