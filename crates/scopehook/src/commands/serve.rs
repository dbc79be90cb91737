//! Serve command implementation.

use scopehook::{LoggingHandlers, ReceiverConfig};
use scopehook_core::SecretKey;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub fn run(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    api_key: Option<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &config_path {
        Some(path) => ReceiverConfig::load(path)?,
        None => ReceiverConfig::default(),
    };

    // Flags and environment override the file.
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(key) = api_key {
        config.api_key = SecretKey::new(key);
    }

    super::init_tracing(verbose || config.debug);
    debug!(config = ?config, "effective configuration");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(scopehook::serve(config, Arc::new(LoggingHandlers)))?;
    Ok(())
}
