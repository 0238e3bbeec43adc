//! Axum extractors for REST API authentication

use crate::ApiError;
use crate::api::error::UnauthorizedReason;
use crate::state::AppState;

use tradehub_auth::bearer_token;
use tradehub_core::User;
use tradehub_db::UserRepository;

use std::future::Future;
use std::panic::Location;

use axum::http::header::AUTHORIZATION;
use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// The resolved identity behind a protected request.
///
/// Extraction runs the whole resolution chain: bearer token out of the
/// authorization header, signature and expiry verification, then a store
/// lookup of the token's subject. Handlers receive the hash-free [`User`]
/// as an explicit argument; nothing rides on ambient request state.
///
/// Every failure along the chain collapses into the same 401 response.
/// The distinct reasons exist only for the log.
#[derive(Debug)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());

            let token = bearer_token(header).map_err(|e| {
                log::debug!("Rejecting request [{}]: {}", e.error_code(), e);
                ApiError::Unauthorized {
                    reason: UnauthorizedReason::TokenMissing,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let claims = state.tokens.verify(token).map_err(|e| {
                log::debug!("Rejecting request [{}]: {}", e.error_code(), e);
                ApiError::Unauthorized {
                    reason: UnauthorizedReason::TokenInvalid,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            let subject = Uuid::parse_str(&claims.sub).map_err(|e| {
                log::debug!("Rejecting request: token subject is not a UUID: {}", e);
                ApiError::Unauthorized {
                    reason: UnauthorizedReason::TokenInvalid,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            // A store failure here is a 500, not a 401
            let repo = UserRepository::new(state.pool.clone());
            let user = repo.find_by_id(subject).await?.ok_or_else(|| {
                log::debug!("Rejecting request: user {} no longer exists", subject);
                ApiError::Unauthorized {
                    reason: UnauthorizedReason::UserNotFound,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

            Ok(CurrentUser(user))
        }
    }
}
