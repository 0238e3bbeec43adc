pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;


pub use api::{
    auth::{
        auth::{login, me, register, update_profile},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
        update_profile_request::UpdateProfileRequest,
        user_dto::UserDto,
        user_response::UserResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;

use tradehub_auth::{PasswordHasher, TokenService};

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = config::Config::from_env()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.log_level,
        config.log_file.clone(),
        config.log_colored,
    )?;

    info!("Starting tradehub-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    info!("Connecting to database: {}", config.database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    tradehub_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Create token service
    let tokens = TokenService::with_hs256(
        config.jwt_secret.as_bytes(),
        config.token_ttl.as_secs() as i64,
    );
    info!("JWT: HS256 token signing enabled");

    // Build application state
    let app_state = AppState {
        pool,
        tokens: Arc::new(tokens),
        hasher: PasswordHasher::default(),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

/// Resolve when the process receives SIGINT (Ctrl+C)
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
