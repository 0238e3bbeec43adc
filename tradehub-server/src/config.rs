use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Symmetric secret for token signing and verification (required)
    pub jwt_secret: String,

    /// Issued-token lifetime (default: 7 days)
    pub token_ttl: Duration,

    /// SQLite database file (default: tradehub.db)
    pub database_path: PathBuf,

    /// Log level (default: info)
    pub log_level: log::LevelFilter,

    /// Optional log file; stdout when unset
    pub log_file: Option<PathBuf>,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// The signing secret is the one value the server refuses to default:
    /// a guessable secret would let anyone mint valid tokens, so absence
    /// (or an empty value) is fatal at startup.
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:5000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ServerError::MissingJwtSecret)?;

        // Humantime syntax, e.g. "7d", "12h", "30m"
        let token_ttl = match std::env::var("TOKEN_TTL") {
            Ok(raw) => humantime::parse_duration(&raw)
                .map_err(|source| ServerError::InvalidTokenTtl { raw, source })?,
            Err(_) => Duration::from_secs(tradehub_auth::DEFAULT_TOKEN_TTL_SECS as u64),
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            token_ttl,

            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "tradehub.db".to_string())
                .into(),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(log::LevelFilter::Info),

            log_file: std::env::var("LOG_FILE").ok().map(PathBuf::from),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        })
    }

    /// Log effective configuration at startup. The secret never appears
    /// here, redacted or otherwise.
    pub fn log_summary(&self) {
        log::info!("Listening on: {}", self.bind_addr);
        log::info!("Database: {}", self.database_path.display());
        log::info!(
            "Token lifetime: {}",
            humantime::format_duration(self.token_ttl)
        );
        log::info!("Log level: {}", self.log_level);
    }
}
