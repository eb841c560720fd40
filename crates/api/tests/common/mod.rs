//! Shared helpers for API integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`)
//! on top of the migrated test database provided by `#[sqlx::test]`,
//! and provides request/seed helpers. Not every test binary uses every
//! helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use photodesk_api::config::ServerConfig;
use photodesk_api::router::build_app_router;
use photodesk_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a PUT request with a JSON body.
pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::PUT)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Seed helpers
// ---------------------------------------------------------------------------

/// Create a client via the API, returning its id.
pub async fn seed_client(app: &Router, email: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/clients",
        json!({ "name": "Test Client", "email": email }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_client failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a shoot for a client via the API, returning its id.
pub async fn seed_shoot(app: &Router, client_id: i64) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/shoots",
        json!({
            "client_id": client_id,
            "shoot_date": "2026-06-15",
            "location": "Studio A",
            "shoot_type": "portrait"
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_shoot failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create a package via the API, returning its id.
pub async fn seed_package(app: &Router, price: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/packages",
        json!({ "name": "Standard Package", "price": price }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_package failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an invoice via the API, returning its id.
pub async fn seed_invoice(app: &Router, shoot_id: i64, package_id: i64, amount: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/invoices",
        json!({
            "shoot_id": shoot_id,
            "package_id": package_id,
            "amount": amount,
            "status": "draft"
        }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_invoice failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Seed a full client -> shoot -> package -> invoice chain, returning
/// the invoice id.
pub async fn seed_invoice_chain(app: &Router, email: &str, amount: &str) -> i64 {
    let client_id = seed_client(app, email).await;
    let shoot_id = seed_shoot(app, client_id).await;
    let package_id = seed_package(app, amount).await;
    seed_invoice(app, shoot_id, package_id, amount).await
}

/// Record a payment via the API, returning its id.
pub async fn seed_payment(app: &Router, invoice_id: i64, amount: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/v1/payments",
        json!({ "invoice_id": invoice_id, "amount": amount }),
    )
    .await;
    assert_eq!(response.status(), 201, "seed_payment failed");
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
