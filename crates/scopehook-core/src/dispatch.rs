//! Routing of verified notifications to handler callbacks.
//!
//! Dispatch classifies the `type` field, parses the optional `timestamp`
//! and invokes exactly one [`HandlerSet`] callback. It does not check
//! signatures; callers run [`crate::verify`] first.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::errors::DispatchError;
use crate::event::EventType;
use crate::notification::{field, Notification};
use crate::timestamp::parse_timestamp;

/// Result of a dispatch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DispatchOutcome {
    /// A scope lifecycle handler ran.
    Processed,
    /// The type was not recognized; `on_unknown_type` ran.
    Rejected,
    /// The notification had no type; `on_missing_type` ran.
    Ignored,
}

/// Information shared with every scope handler.
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    /// Parsed `timestamp` field, for audit purposes only.
    pub timestamp: Option<DateTime<Utc>>,
    /// The full notification, unknown fields included.
    pub fields: &'a Notification,
}

/// Callbacks supplied by the application.
///
/// Identifier arguments are passed through unvalidated; an absent field
/// arrives as an empty string. Receivers take `&self` so a single handler
/// set can serve concurrent requests.
pub trait HandlerSet {
    /// A scope was created.
    fn on_scope_created(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str);

    /// A scope was deleted.
    fn on_scope_deleted(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str);

    /// A user joined a scope.
    fn on_scope_joined(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str);

    /// A user left a scope.
    fn on_scope_left(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str);

    /// The platform sent a type this handler set does not know. New types
    /// are expected over time.
    fn on_unknown_type(&self, _event_type: &str, _fields: &Notification) {}

    /// The notification had no `type` field.
    fn on_missing_type(&self, _fields: &Notification) {}
}

macro_rules! forward_handler_set {
    ($($ptr:ty),*) => {
        $(
            impl<T: HandlerSet + ?Sized> HandlerSet for $ptr {
                fn on_scope_created(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
                    (**self).on_scope_created(ctx, app_id, scope_id)
                }

                fn on_scope_deleted(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
                    (**self).on_scope_deleted(ctx, app_id, scope_id)
                }

                fn on_scope_joined(
                    &self,
                    ctx: &EventContext<'_>,
                    app_id: &str,
                    scope_id: &str,
                    user_id: &str,
                ) {
                    (**self).on_scope_joined(ctx, app_id, scope_id, user_id)
                }

                fn on_scope_left(
                    &self,
                    ctx: &EventContext<'_>,
                    app_id: &str,
                    scope_id: &str,
                    user_id: &str,
                ) {
                    (**self).on_scope_left(ctx, app_id, scope_id, user_id)
                }

                fn on_unknown_type(&self, event_type: &str, fields: &Notification) {
                    (**self).on_unknown_type(event_type, fields)
                }

                fn on_missing_type(&self, fields: &Notification) {
                    (**self).on_missing_type(fields)
                }
            }
        )*
    };
}

forward_handler_set!(&T, Box<T>, Arc<T>);

/// Dispatches a verified notification to exactly one handler.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidTimestamp`] when a `timestamp` field is
/// present but not a number. No handler runs in that case.
///
/// # Example
///
/// ```rust
/// use scopehook_core::{dispatch, DispatchOutcome, EventContext, HandlerSet, Notification};
///
/// struct Noop;
/// impl HandlerSet for Noop {
///     fn on_scope_created(&self, _: &EventContext<'_>, _: &str, _: &str) {}
///     fn on_scope_deleted(&self, _: &EventContext<'_>, _: &str, _: &str) {}
///     fn on_scope_joined(&self, _: &EventContext<'_>, _: &str, _: &str, _: &str) {}
///     fn on_scope_left(&self, _: &EventContext<'_>, _: &str, _: &str, _: &str) {}
/// }
///
/// let fields: Notification = [("type", "SomeFutureType")].into_iter().collect();
/// assert_eq!(dispatch(&fields, &Noop)?, DispatchOutcome::Rejected);
/// # Ok::<(), scopehook_core::DispatchError>(())
/// ```
pub fn dispatch<H: HandlerSet + ?Sized>(
    fields: &Notification,
    handlers: &H,
) -> Result<DispatchOutcome, DispatchError> {
    let Some(raw_type) = fields.get(field::TYPE) else {
        handlers.on_missing_type(fields);
        return Ok(DispatchOutcome::Ignored);
    };

    let timestamp = fields
        .get(field::TIMESTAMP)
        .map(parse_timestamp)
        .transpose()?;

    let ctx = EventContext { timestamp, fields };
    let app_id = fields.get(field::APP).unwrap_or_default();
    let scope_id = fields.get(field::SCOPE).unwrap_or_default();
    let user_id = fields.get(field::USER).unwrap_or_default();

    match EventType::classify(Some(raw_type)) {
        EventType::ScopeCreated => handlers.on_scope_created(&ctx, app_id, scope_id),
        EventType::ScopeDeleted => handlers.on_scope_deleted(&ctx, app_id, scope_id),
        EventType::ScopeJoined => handlers.on_scope_joined(&ctx, app_id, scope_id, user_id),
        EventType::ScopeLeft => handlers.on_scope_left(&ctx, app_id, scope_id, user_id),
        EventType::Unknown(_) | EventType::Missing => {
            handlers.on_unknown_type(raw_type, fields);
            return Ok(DispatchOutcome::Rejected);
        }
    }

    Ok(DispatchOutcome::Processed)
}
