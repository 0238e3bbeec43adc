pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

/// Embedded schema migrations for the credential store
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await.map_err(|e| DbError::Migration {
        message: format!("Migration failed: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(())
}
