//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.
//!
//! Authentication failures deserve a note: the 401 body is uniform per
//! endpoint family. A caller cannot tell a missing account from a wrong
//! password, or a bad signature from an expired token. The precise reason
//! goes to the log and nowhere else.

use tradehub_auth::AuthError;
use tradehub_core::CoreError;
use tradehub_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Why a request failed authentication. Logged verbatim, never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedReason {
    /// Missing header, wrong scheme, or empty bearer token
    TokenMissing,
    /// Signature, structure, or expiry check failed
    TokenInvalid,
    /// Verified token subject no longer exists in the store
    UserNotFound,
    /// Login with an unknown email or a wrong password
    BadCredentials,
}

impl UnauthorizedReason {
    /// Internal detail for the log line
    fn log_detail(&self) -> &'static str {
        match self {
            Self::TokenMissing => "token missing",
            Self::TokenInvalid => "invalid token",
            Self::UserNotFound => "user not found",
            Self::BadCredentials => "bad credentials",
        }
    }

    /// The uniform client-facing message: one string for the login family,
    /// one for the resolver family, so no failure mode stands out.
    fn public_message(&self) -> &'static str {
        match self {
            Self::BadCredentials => "Invalid credentials",
            _ => "Unauthorized",
        }
    }
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Authentication failure (401); the reason stays server-side
    #[error("Unauthorized: {} {location}", .reason.log_detail())]
    Unauthorized {
        reason: UnauthorizedReason,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Uniqueness conflict (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the full error with location; only Internal is a server fault
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Unauthorized { reason, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".into(),
                    message: reason.public_message().to_string(),
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "CONFLICT".into(),
                    message,
                    field: None,
                },
            ),
            // Internal details never reach the client
            ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message: "Internal server error".to_string(),
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("Invalid role: '{}'", value),
                field: Some("role".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert credential store errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::EmailTaken { .. } => ApiError::Conflict {
                message: "Email already in use".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

/// Convert hashing and token-issuance errors to API errors.
///
/// Token *verification* failures never take this path - the identity
/// resolver maps those to 401 itself. Anything arriving here is
/// infrastructure falling over.
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Auth subsystem error: {}", e);
        ApiError::Internal {
            message: "Internal server error".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
