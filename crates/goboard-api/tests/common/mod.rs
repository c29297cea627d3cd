//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use goboard_core::clock::Clock;
use goboard_core::repository::GameRepository;
use goboard_store::pg_game_repository::PgGameRepository;
use goboard_test_support::{FixedClock, InMemoryGameRepository};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use goboard_api::app;
use goboard_api::state::AppState;

/// Build the full app router, exactly as `main.rs` serves it, over the given
/// repository and a fixed clock.
pub fn build_test_app(game_repository: Arc<dyn GameRepository>) -> Router {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock::default());
    app(AppState::new(clock, game_repository))
}

/// Build the full app router over a fresh in-memory repository.
pub fn build_in_memory_app() -> Router {
    build_test_app(Arc::new(InMemoryGameRepository::new()))
}

/// Build the full app router over a real `PgGameRepository`.
pub fn build_pg_test_app(pool: PgPool) -> Router {
    build_test_app(Arc::new(PgGameRepository::new(pool)))
}

/// Send a request and return the status, headers and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body_bytes.to_vec())
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

    let (status, _, body_bytes) = send(app, request).await;
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, _, body_bytes) = send(app, request).await;
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
