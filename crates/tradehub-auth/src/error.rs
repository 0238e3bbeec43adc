use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {source} {location}")]
    Hash {
        #[source]
        source: bcrypt::BcryptError,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token issuance failed: {source} {location}")]
    TokenIssue {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Bearer token missing from authorization header {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },
}

impl AuthError {
    /// Stable error code for logging and diagnostics
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Hash { .. } => "HASH_FAILED",
            Self::Task { .. } => "TASK_FAILED",
            Self::TokenIssue { .. } => "TOKEN_ISSUE_FAILED",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::InvalidScheme { .. } => "INVALID_SCHEME",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
