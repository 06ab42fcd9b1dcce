// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tracket::config::Config;
use tracket::db::MemDb;
use tracket::routes::create_router;
use tracket::AppState;

/// Create a test app with an empty in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config: Config::default(),
        db: MemDb::new(),
    });
    (create_router(state.clone()), state)
}

/// Send a bodyless request and decode the JSON response (Null when empty).
#[allow(dead_code)]
pub async fn send(app: &axum::Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    dispatch(app, request).await
}

/// Send a JSON-body request and decode the JSON response (Null when empty).
#[allow(dead_code)]
pub async fn send_json(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Value,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    dispatch(app, request).await
}

async fn dispatch(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// A valid activity creation payload with overridable fields.
#[allow(dead_code)]
pub fn activity_payload(date: &str, club_name: Option<&str>, duration: i32) -> Value {
    serde_json::json!({
        "date": date,
        "sport": "padel",
        "activityType": "friendly",
        "duration": duration,
        "clubName": club_name,
        "clubLocation": null,
        "clubMapLink": null,
        "clubLatitude": null,
        "clubLongitude": null,
        "sessionRating": null,
        "racket": null,
        "partner": null,
        "opponents": null,
        "notes": null,
    })
}
