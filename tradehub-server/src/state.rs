use tradehub_auth::{PasswordHasher, TokenService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state threaded through every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub hasher: PasswordHasher,
}
