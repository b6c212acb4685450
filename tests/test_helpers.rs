// tests/test_helpers.rs
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use std::time::Duration;
use tower::ServiceExt;

use folio::catalog::Catalog;
use folio::config::Settings;
use folio::render::{LinkStyle, Renderer};
use folio::web::{create_router, state::AppState};

/// AppState over the built-in catalog with no chat delay.
pub fn create_test_app_state() -> AppState {
    let renderer = Renderer::new(&Settings::default(), LinkStyle::Query).unwrap();
    AppState::new(Catalog::shared(), renderer, Duration::ZERO)
}

/// Router with the given chat typing delay
pub fn create_delayed_app(chat_delay: Duration) -> Router {
    let renderer = Renderer::new(&Settings::default(), LinkStyle::Query).unwrap();
    create_router(AppState::new(Catalog::shared(), renderer, chat_delay))
}

pub fn create_test_app() -> Router {
    create_router(create_test_app_state())
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response<Body>, expected: StatusCode) {
    assert_eq!(response.status(), expected, "unexpected status");
}
