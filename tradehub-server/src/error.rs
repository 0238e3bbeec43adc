use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("JWT_SECRET is not set; refusing to start without a signing secret")]
    MissingJwtSecret,

    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Invalid TOKEN_TTL '{raw}': {source}")]
    InvalidTokenTtl {
        raw: String,
        #[source]
        source: humantime::DurationError,
    },

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialize logger: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
