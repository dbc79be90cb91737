pub mod serve;
pub mod sign;
pub mod verify;

use scopehook::adapters;
use scopehook_core::Notification;
use std::io::{self, Read};

/// Filter used when `RUST_LOG` is not consulted or not set.
///
/// Only the application crate logs; the core has no subscriber-facing output.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "scopehook=debug"
    } else {
        "scopehook=info"
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins unless `verbose`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(default_directive(true))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Reads a JSON notification from a file or stdin.
pub fn read_notification(input: Option<String>) -> Result<Notification, Box<dyn std::error::Error>> {
    let bytes = if let Some(path) = input {
        std::fs::read(&path).map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    };

    adapters::from_json(&bytes).map_err(|e| format!("Invalid notification: {}", e).into())
}
