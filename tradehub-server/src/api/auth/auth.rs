//! Account REST API handlers
//!
//! Registration and login are open endpoints; self-lookup and profile
//! update sit behind the [`CurrentUser`] identity resolver.
//!
//! Raw passwords live only inside a request scope: they go to the hasher
//! or the verifier and are never stored, logged, or echoed back.

use crate::api::error::UnauthorizedReason;
use crate::state::AppState;
use crate::{
    ApiError, ApiResult, AuthResponse, CurrentUser, LoginRequest, RegisterRequest,
    UpdateProfileRequest, UserResponse,
};

use tradehub_core::{
    ProfileChanges, Role, UserRecord, normalize_email, validate_email, validate_name,
    validate_password, validate_profile_field,
};
use tradehub_db::UserRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/register
///
/// Create an account and issue its first token
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let name_raw = req.name.as_deref().unwrap_or("");
    let email_raw = req.email.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");

    if name_raw.trim().is_empty() || email_raw.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation {
            message: "Name, email, and password are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let name = validate_name(name_raw)?;
    let email = validate_email(email_raw)?;
    validate_password(password)?;

    // Any non-enum role string, including "", is a 400
    let role = match req.role.as_deref() {
        None => Role::default(),
        Some(value) => Role::from_str(value)?,
    };

    let business_name =
        validate_profile_field(req.business_name.as_deref().unwrap_or(""), "businessName")?;
    let phone = req.phone.as_deref().unwrap_or("").trim().to_string();
    let location = validate_profile_field(req.location.as_deref().unwrap_or(""), "location")?;

    let repo = UserRepository::new(state.pool.clone());
    if repo.find_by_email(&email).await?.is_some() {
        return Err(ApiError::Conflict {
            message: "Email already registered".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let password_hash = state.hasher.hash(password).await?;
    let record = UserRecord::new(
        name,
        email,
        password_hash,
        role,
        business_name,
        phone,
        location,
    );

    // The unique index backstops the pre-check when two registrations race
    repo.create(&record).await?;

    let token = state.tokens.issue(record.user.id)?;
    log::info!("Registered user {} ({})", record.user.id, record.user.role);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: record.user.into(),
        }),
    ))
}

/// POST /auth/login
///
/// Verify credentials and issue a fresh token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let email_raw = req.email.as_deref().unwrap_or("");
    let password = req.password.as_deref().unwrap_or("");

    if email_raw.trim().is_empty() || password.is_empty() {
        return Err(ApiError::Validation {
            message: "Email and password are required".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Normalized but not shape-checked: a malformed email just misses
    let email = normalize_email(email_raw);

    let repo = UserRepository::new(state.pool.clone());
    let record = repo.find_by_email(&email).await?.ok_or_else(|| {
        // Same outcome as a wrong password; only the log knows which
        ApiError::Unauthorized {
            reason: UnauthorizedReason::BadCredentials,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    if !state.hasher.verify(password, &record.password_hash).await {
        return Err(ApiError::Unauthorized {
            reason: UnauthorizedReason::BadCredentials,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let token = state.tokens.issue(record.user.id)?;
    log::info!("User {} logged in", record.user.id);

    Ok(Json(AuthResponse {
        token,
        user: record.user.into(),
    }))
}

/// GET /auth/me
///
/// Return the identity the resolver attached; no second store read
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse { user: user.into() })
}

/// PUT /auth/profile
///
/// Apply a partial profile update for the authenticated user
pub async fn update_profile(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    // Validate every supplied field before touching the store; the write
    // below is all-or-nothing
    let mut changes = ProfileChanges::default();

    if let Some(ref raw) = req.name {
        changes.name = Some(validate_name(raw)?);
    }

    if let Some(ref raw) = req.email {
        let email = validate_email(raw)?;
        if email != user.email && repo.email_in_use_by_other(&email, user.id).await? {
            return Err(ApiError::Conflict {
                message: "Email already in use".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        changes.email = Some(email);
    }

    if let Some(ref raw) = req.password {
        validate_password(raw)?;
        changes.password_hash = Some(state.hasher.hash(raw).await?);
    }

    if let Some(ref raw) = req.business_name {
        changes.business_name = Some(validate_profile_field(raw, "businessName")?);
    }

    if let Some(ref raw) = req.phone {
        changes.phone = Some(raw.trim().to_string());
    }

    if let Some(ref raw) = req.location {
        changes.location = Some(validate_profile_field(raw, "location")?);
    }

    if changes.is_empty() {
        // Nothing to write; answer with the identity as resolved
        return Ok(Json(UserResponse { user: user.into() }));
    }

    let updated = repo.update(user.id, &changes).await?.ok_or_else(|| {
        // Account deleted between resolution and the write
        ApiError::NotFound {
            message: "User not found".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    log::info!("User {} updated profile", user.id);

    Ok(Json(UserResponse {
        user: updated.into(),
    }))
}
