pub mod error;
pub mod models;
pub mod validate;

pub use error_location::ErrorLocation;

pub use error::{CoreError, Result};
pub use models::profile_changes::ProfileChanges;
pub use models::role::Role;
pub use models::user::{User, UserRecord};
pub use validate::{
    normalize_email, validate_email, validate_name, validate_password, validate_profile_field,
};

#[cfg(test)]
mod tests;
