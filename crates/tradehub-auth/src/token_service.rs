use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Default issued-token lifetime: 7 days
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Issues and verifies the bearer tokens handed out at registration and
/// login.
///
/// One symmetric secret both signs and verifies. Tokens are never stored:
/// a token is valid exactly as long as its signature and expiry hold, and
/// there is no revocation list to consult.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime_secs: i64,
}

impl TokenService {
    /// Create a service signing with HS256 (symmetric secret)
    pub fn with_hs256(secret: &[u8], lifetime_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            lifetime_secs,
        }
    }

    /// Issue a signed token bound to `subject`, expiring after the
    /// configured lifetime
    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthErrorResult<String> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.lifetime_secs,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|source| {
            AuthError::TokenIssue {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Expiry, bad signature, and structural garbage each map to their own
    /// error so callers can log the real reason; none of that detail
    /// belongs in a client response.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Configured lifetime in seconds (for logging/diagnostics)
    pub fn lifetime_secs(&self) -> i64 {
        self.lifetime_secs
    }
}

/// Extract the raw token from an `Authorization: Bearer <token>` header
/// value. Anything else (absent header, wrong scheme, empty token) is an
/// error; callers collapse all of them into one uniform rejection.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?;

    if token.is_empty() {
        return Err(AuthError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
