use crate::ApiError;
use crate::api::error::UnauthorizedReason;

use tradehub_core::CoreError;
use tradehub_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Name must be at least 2 characters".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;

    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Name must be at least 2 characters");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_key() {
    let error = ApiError::Validation {
        message: "Email and password are required".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_resolver_401_bodies_are_identical() {
    // A client must not be able to distinguish why resolution failed
    let reasons = [
        UnauthorizedReason::TokenMissing,
        UnauthorizedReason::TokenInvalid,
        UnauthorizedReason::UserNotFound,
    ];

    let mut bodies = Vec::new();
    for reason in reasons {
        let error = ApiError::Unauthorized {
            reason,
            location: ErrorLocation::from(Location::caller()),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
    assert_eq!(bodies[0]["error"]["code"], "UNAUTHORIZED");
    assert_eq!(bodies[0]["error"]["message"], "Unauthorized");
}

#[tokio::test]
async fn test_bad_credentials_returns_invalid_credentials_message() {
    let error = ApiError::Unauthorized {
        reason: UnauthorizedReason::BadCredentials,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;

    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "Email already in use".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;

    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "Email already in use");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_generic_message() {
    let error = ApiError::Internal {
        message: "Database connection failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    // The underlying message never reaches the client
    assert_eq!(json["error"]["message"], "Internal server error");
}

#[test]
fn test_email_taken_converts_to_conflict() {
    let db_err = DbError::EmailTaken {
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = db_err.into();

    match api_err {
        ApiError::Conflict { message, .. } => {
            assert_eq!(message, "Email already in use");
        }
        other => panic!("Expected Conflict error, got {:?}", other),
    }
}

#[test]
fn test_core_validation_converts_with_field() {
    let core_err = CoreError::Validation {
        message: "Invalid email format".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Invalid email format");
            assert_eq!(field.as_deref(), Some("email"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_invalid_role_converts_to_validation() {
    let core_err = CoreError::InvalidRole {
        value: "boss".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("boss"));
            assert_eq!(field.as_deref(), Some("role"));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}
