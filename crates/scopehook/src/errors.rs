use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a request into a notification.
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The body is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The body is JSON but not an object.
    #[error("notification must be a JSON object")]
    NotAnObject,
    /// A member holds an array or object instead of a scalar.
    #[error("field '{field}' must be a string, number or boolean")]
    UnsupportedValue {
        /// Name of the offending member.
        field: String,
    },
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for this schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    /// `unauthenticated_status` is not a usable response status.
    #[error("unauthenticated_status {0} is not an HTTP status between 200 and 599")]
    InvalidStatus(u16),
}

/// Errors raised while running the server.
#[derive(Error, Debug)]
pub enum ServeError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The listening socket could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested.
        address: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The server loop failed.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}
