//! Verify-then-dispatch composition.

use crate::dispatch::{dispatch, DispatchOutcome, HandlerSet};
use crate::errors::DispatchError;
use crate::notification::Notification;
use crate::signer::SecretKey;
use crate::verifier::{verify, VerifyResult};

/// What happened to one received notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receipt {
    /// Signature check failed; no handler ran.
    Unauthenticated(VerifyResult),
    /// Signature was valid and the notification was dispatched.
    Dispatched(DispatchOutcome),
}

/// Receiver bound to one shared secret.
///
/// Holds only the immutable key, so it can be cloned into every request
/// task without coordination.
#[derive(Debug, Clone)]
pub struct Receiver {
    key: SecretKey,
}

impl Receiver {
    /// Creates a receiver for `key`.
    pub fn new(key: SecretKey) -> Self {
        Self { key }
    }

    /// Key this receiver verifies against.
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// Checks the signature only.
    pub fn verify(&self, fields: &Notification) -> VerifyResult {
        verify(&self.key, fields)
    }

    /// Verifies `fields` and, when authentic, dispatches them to `handlers`.
    ///
    /// # Errors
    ///
    /// Propagates [`DispatchError`] from dispatch of an authentic
    /// notification.
    pub fn receive<H: HandlerSet + ?Sized>(
        &self,
        fields: &Notification,
        handlers: &H,
    ) -> Result<Receipt, DispatchError> {
        match self.verify(fields) {
            VerifyResult::Authentic => Ok(Receipt::Dispatched(dispatch(fields, handlers)?)),
            rejected => Ok(Receipt::Unauthenticated(rejected)),
        }
    }
}
