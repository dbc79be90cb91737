//! Authentication and dispatch core for scope notifications.
//!
//! This crate provides:
//! - Canonical signing of notification fields (`sha256(key || sorted fields)`)
//! - Signature verification with constant-time comparison
//! - Typed event classification and dispatch to a [`HandlerSet`]
//!
//! Core invariants:
//! - Notifications are read-only once constructed by a transport adapter
//! - Signatures are independent of field insertion order
//! - Unknown or missing event types are outcomes, never failures
//! - The core holds no process-wide state and performs no I/O
//!
//! ## Quick Start
//!
//! ```rust
//! use scopehook_core::{dispatch, verify, EventContext, HandlerSet, Notification, SecretKey};
//!
//! struct Print;
//!
//! impl HandlerSet for Print {
//!     fn on_scope_created(&self, _: &EventContext<'_>, app_id: &str, scope_id: &str) {
//!         println!("scope {scope_id} created for app {app_id}");
//!     }
//!     fn on_scope_deleted(&self, _: &EventContext<'_>, _: &str, _: &str) {}
//!     fn on_scope_joined(&self, _: &EventContext<'_>, _: &str, _: &str, _: &str) {}
//!     fn on_scope_left(&self, _: &EventContext<'_>, _: &str, _: &str, _: &str) {}
//! }
//!
//! let key = SecretKey::new("secret");
//! let fields: Notification = [("type", "ScopeCreated"), ("appId", "a1"), ("scopeId", "s1")]
//!     .into_iter()
//!     .collect();
//! let signed = fields.signed(&key);
//!
//! assert!(verify(&key, &signed).is_authentic());
//! dispatch(&signed, &Print)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(missing_docs)]

/// Dispatch of verified notifications to handler callbacks.
pub mod dispatch;
/// Error types for core operations.
pub mod errors;
/// Event type classification.
pub mod event;
/// Flat notification field mapping.
pub mod notification;
/// Verify-then-dispatch composition bound to one secret key.
pub mod receiver;
/// Canonical signing of notification fields.
pub mod signer;
/// Timestamp field parsing.
pub mod timestamp;
/// Signature verification.
pub mod verifier;

pub use dispatch::{dispatch, DispatchOutcome, EventContext, HandlerSet};
pub use errors::DispatchError;
pub use event::EventType;
pub use notification::{field, Notification};
pub use receiver::{Receipt, Receiver};
pub use signer::{sign, signing_input, SecretKey};
pub use timestamp::parse_timestamp;
pub use verifier::{verify, VerifyResult};
