#![allow(dead_code)]

//! Test infrastructure for tradehub-server API tests

use tradehub_auth::{PasswordHasher, TokenService};
use tradehub_server::AppState;
use tradehub_server::routes::build_router;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Secret every test token service signs with
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    tradehub_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing. Cost-4 hashing keeps the suite fast.
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;

    AppState {
        pool,
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET, 3600)),
        hasher: PasswordHasher::new(4),
    }
}

/// Register a user through the API and return the response body
/// (token plus user) for follow-up requests
pub async fn register_test_user(
    state: &AppState,
    name: &str,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("Content-Type", "application/json")
        .body(Body::from(
            json!({
                "name": name,
                "email": email,
                "password": password
            })
            .to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("Register response was not JSON")
}
