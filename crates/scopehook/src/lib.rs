//! HTTP receiver for signed scope notifications.
//!
//! This crate provides the layers around `scopehook-core`:
//! - Transport adapters turning JSON bodies, forms and query strings into
//!   flat [`Notification`](scopehook_core::Notification) mappings
//! - An axum router exposing `/json`, `/post` and `/get`
//! - File and flag based configuration
//! - A handler set that records every event through `tracing`
//!
//! The signature and dispatch rules themselves live in `scopehook-core`.
#![deny(missing_docs)]

/// Wire-format adapters.
pub mod adapters;
/// Receiver configuration.
pub mod config;
/// Error types for the application layer.
pub mod errors;
/// Logging handler set.
pub mod handlers;
/// HTTP routes and server loop.
pub mod http;

pub use config::ReceiverConfig;
pub use errors::{AdapterError, ConfigError, ServeError};
pub use handlers::LoggingHandlers;
pub use http::{build_router, serve, AppState, MAX_BODY_BYTES};
