use crate::state::AppState;
use crate::{ApiError, CurrentUser};

use tradehub_auth::{PasswordHasher, TokenService};
use tradehub_core::{Role, UserRecord};
use tradehub_db::UserRepository;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use sqlx::SqlitePool;
use uuid::Uuid;

const TEST_SECRET: &[u8] = b"extractor-test-secret";

async fn create_test_state() -> AppState {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test pool");

    tradehub_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    AppState {
        pool,
        tokens: Arc::new(TokenService::with_hs256(TEST_SECRET, 3600)),
        hasher: PasswordHasher::new(4),
    }
}

/// Insert a user directly; the hash is never verified by the resolver
async fn seed_user(state: &AppState, email: &str) -> UserRecord {
    let record = UserRecord::new(
        "Extractor Test".to_string(),
        email.to_string(),
        "$2b$04$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".to_string(),
        Role::Retailer,
        String::new(),
        String::new(),
        String::new(),
    );
    UserRepository::new(state.pool.clone())
        .create(&record)
        .await
        .expect("Failed to seed user");
    record
}

#[tokio::test]
async fn test_extractor_with_valid_token() {
    let state = create_test_state().await;
    let record = seed_user(&state, "resolver@example.com").await;
    let token = state.tokens.issue(record.user.id).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    let CurrentUser(user) = result.expect("Extraction should succeed");
    assert_eq!(user.id, record.user.id);
    assert_eq!(user.email, "resolver@example.com");
}

#[tokio::test]
async fn test_extractor_without_header_rejects() {
    let state = create_test_state().await;

    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Unauthorized { .. }
    ));
}

#[tokio::test]
async fn test_extractor_with_basic_scheme_rejects() {
    let state = create_test_state().await;

    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Unauthorized { .. }
    ));
}

#[tokio::test]
async fn test_extractor_with_garbage_token_rejects() {
    let state = create_test_state().await;

    let request = Request::builder()
        .header("Authorization", "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Unauthorized { .. }
    ));
}

#[tokio::test]
async fn test_extractor_with_unknown_subject_rejects() {
    let state = create_test_state().await;

    // Valid signature, but the subject was never registered
    let token = state.tokens.issue(Uuid::new_v4()).unwrap();

    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(matches!(
        result.unwrap_err(),
        ApiError::Unauthorized { .. }
    ));
}
