//! Canonical signing of notification fields.
//!
//! Signatures are computed as `sha256(key "\n" name=value "\n" ...)` where
//! fields are sorted by name in byte order and the `signature` field is
//! excluded from the hash input.

use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::fmt;

use crate::notification::{field, Notification};

/// Shared secret used to sign notifications.
///
/// An empty key is a misconfiguration but is still accepted: every
/// signature computed with it is simply a hash of the fields alone.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(String);

impl SecretKey {
    /// Wraps a raw key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns true if no key was configured.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key text.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("SecretKey(<empty>)")
        } else {
            f.write_str("SecretKey(<redacted>)")
        }
    }
}

/// Builds the exact text that [`sign`] hashes.
///
/// The first line is the raw key, followed by one `name=value` line per
/// field except `signature`, sorted by name. Lines are joined with `\n`
/// and there is no trailing newline.
pub fn signing_input(key: &SecretKey, fields: &Notification) -> String {
    let mut pairs: Vec<(&str, &str)> = fields
        .iter()
        .filter(|(name, _)| *name != field::SIGNATURE)
        .collect();
    // Byte order on the name alone; comparing whole lines would let the
    // value separator take part in the ordering.
    pairs.sort_unstable_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));

    let mut input = String::from(key.expose());
    for (name, value) in pairs {
        input.push('\n');
        input.push_str(name);
        input.push('=');
        input.push_str(value);
    }
    input
}

/// Computes the lowercase hex SHA-256 signature of a notification.
///
/// # Example
///
/// ```rust
/// use scopehook_core::{sign, Notification, SecretKey};
///
/// let fields: Notification = [("type", "ScopeLeft"), ("appId", "app1")].into_iter().collect();
/// let signature = sign(&SecretKey::new("secret"), &fields);
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign(key: &SecretKey, fields: &Notification) -> String {
    let mut hasher = Sha256::new();
    hasher.update(signing_input(key, fields).as_bytes());
    hex::encode(hasher.finalize())
}
