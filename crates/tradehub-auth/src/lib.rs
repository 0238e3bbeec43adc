pub mod claims;
pub mod error;
pub mod password;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::{DEFAULT_COST, PasswordHasher};
pub use token_service::{DEFAULT_TOKEN_TTL_SECS, TokenService, bearer_token};
