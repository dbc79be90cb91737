use axum::http::StatusCode;
use scopehook_core::SecretKey;
use serde::Deserialize;
use std::path::Path;

use crate::errors::ConfigError;

/// Settings for one receiver process.
///
/// Built once at startup and passed by value; nothing reads it globally.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Shared secret used to verify notifications. May be empty.
    #[serde(default)]
    pub api_key: SecretKey,

    /// Enables debug-level logging.
    #[serde(default)]
    pub debug: bool,

    /// Status returned for notifications that fail the signature check.
    #[serde(default = "default_unauthenticated_status")]
    pub unauthenticated_status: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    11111
}

fn default_unauthenticated_status() -> u16 {
    200
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: SecretKey::default(),
            debug: false,
            unauthenticated_status: default_unauthenticated_status(),
        }
    }
}

impl ReceiverConfig {
    /// Loads and validates a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parses and validates TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.unauthenticated_status()?;
        Ok(config)
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validated status for rejected signatures.
    pub fn unauthenticated_status(&self) -> Result<StatusCode, ConfigError> {
        match self.unauthenticated_status {
            200..=599 => StatusCode::from_u16(self.unauthenticated_status)
                .map_err(|_| ConfigError::InvalidStatus(self.unauthenticated_status)),
            other => Err(ConfigError::InvalidStatus(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = ReceiverConfig::from_toml("").unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:11111");
        assert!(config.api_key.is_empty());
        assert!(!config.debug);
        assert_eq!(config.unauthenticated_status().unwrap(), StatusCode::OK);
    }

    #[test]
    fn reads_all_fields() {
        let config = ReceiverConfig::from_toml(
            r#"
            host = "127.0.0.1"
            port = 8080
            api_key = "secret"
            debug = true
            unauthenticated_status = 403
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.api_key.expose(), "secret");
        assert!(config.debug);
        assert_eq!(config.unauthenticated_status().unwrap(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            ReceiverConfig::from_toml("apikey = \"typo\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_informational_status() {
        assert!(matches!(
            ReceiverConfig::from_toml("unauthenticated_status = 101"),
            Err(ConfigError::InvalidStatus(101))
        ));
    }

    #[test]
    fn debug_output_hides_key() {
        let config = ReceiverConfig::from_toml("api_key = \"hunter2\"").unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
