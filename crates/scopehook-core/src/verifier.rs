//! Signature verification for inbound notifications.

use std::fmt;
use subtle::ConstantTimeEq;

use crate::notification::Notification;
use crate::signer::{sign, SecretKey};

/// Verdict of checking a notification's signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyResult {
    /// The supplied signature matches the computed one.
    Authentic,
    /// The notification carries no `signature` field.
    MissingSignature,
    /// A signature was supplied but does not match.
    SignatureMismatch,
}

impl VerifyResult {
    /// Returns true only for [`VerifyResult::Authentic`].
    pub fn is_authentic(self) -> bool {
        self == VerifyResult::Authentic
    }
}

impl fmt::Display for VerifyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerifyResult::Authentic => "authentic",
            VerifyResult::MissingSignature => "missing signature",
            VerifyResult::SignatureMismatch => "signature mismatch",
        })
    }
}

/// Verifies the `signature` field of a notification against `key`.
///
/// A notification without a signature is rejected before anything is
/// hashed. The comparison itself runs in constant time with respect to the
/// position of the first differing byte.
///
/// # Example
///
/// ```rust
/// use scopehook_core::{verify, Notification, SecretKey, VerifyResult};
///
/// let key = SecretKey::new("secret");
/// let fields: Notification = [("type", "ScopeDeleted")].into_iter().collect();
///
/// assert_eq!(verify(&key, &fields), VerifyResult::MissingSignature);
/// assert_eq!(verify(&key, &fields.signed(&key)), VerifyResult::Authentic);
/// ```
pub fn verify(key: &SecretKey, fields: &Notification) -> VerifyResult {
    let Some(supplied) = fields.signature() else {
        return VerifyResult::MissingSignature;
    };

    let expected = sign(key, fields);
    if bool::from(supplied.as_bytes().ct_eq(expected.as_bytes())) {
        VerifyResult::Authentic
    } else {
        VerifyResult::SignatureMismatch
    }
}
