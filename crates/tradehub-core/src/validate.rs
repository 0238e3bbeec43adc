//! Input validation and normalization shared by registration and profile
//! update.
//!
//! Every function either returns the cleaned value or a
//! [`CoreError::Validation`] naming the offending field. Nothing here
//! touches the store; uniqueness is the store's job.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Display name bounds (after trimming)
pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 120;

/// Minimum raw password length
pub const PASSWORD_MIN: usize = 8;

/// Cap on free-text profile fields
pub const PROFILE_FIELD_MAX: usize = 200;

/// Trim a display name and enforce its length bounds
#[track_caller]
pub fn validate_name(raw: &str) -> CoreErrorResult<String> {
    let name = raw.trim();
    let len = name.chars().count();
    if len < NAME_MIN || len > NAME_MAX {
        return Err(CoreError::Validation {
            message: format!("Name must be {NAME_MIN}-{NAME_MAX} characters"),
            field: Some("name".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(name.to_string())
}

/// Lowercase and trim an email address without validating its shape.
/// Login uses this alone so that lookups always hit the normalized form.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize an email and check the basic `local@domain.tld` shape:
/// no whitespace, exactly one `@`, non-empty local part, and a dot with
/// non-empty sides somewhere in the domain.
#[track_caller]
pub fn validate_email(raw: &str) -> CoreErrorResult<String> {
    let email = normalize_email(raw);

    let shape_ok = !email.chars().any(char::is_whitespace)
        && match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty()
                    && !domain.contains('@')
                    && matches!(
                        domain.rsplit_once('.'),
                        Some((host, tld)) if !host.is_empty() && !tld.is_empty()
                    )
            }
            None => false,
        };

    if !shape_ok {
        return Err(CoreError::Validation {
            message: "Invalid email format".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(email)
}

/// Check a raw password against the minimum length. The value itself is
/// never stored, logged, or echoed back.
#[track_caller]
pub fn validate_password(raw: &str) -> CoreErrorResult<()> {
    if raw.chars().count() < PASSWORD_MIN {
        return Err(CoreError::Validation {
            message: format!("Password must be at least {PASSWORD_MIN} characters"),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}

/// Trim a free-text profile field (business name, location) and cap its
/// length. `field` is the wire name reported back on failure.
#[track_caller]
pub fn validate_profile_field(raw: &str, field: &'static str) -> CoreErrorResult<String> {
    let value = raw.trim();
    if value.chars().count() > PROFILE_FIELD_MAX {
        return Err(CoreError::Validation {
            message: format!("{field} must be at most {PROFILE_FIELD_MAX} characters"),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(value.to_string())
}
