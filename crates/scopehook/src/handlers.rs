//! Handler set that records scope events in the log.
//!
//! Business actions for scope events are application specific; this set
//! only reports what arrived. Wrap or replace it to act on events.

use scopehook_core::{EventContext, HandlerSet, Notification};
use tracing::{error, info, warn};

/// Logs every dispatched event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHandlers;

fn timestamp(ctx: &EventContext<'_>) -> String {
    ctx.timestamp
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "-".to_string())
}

impl HandlerSet for LoggingHandlers {
    fn on_scope_created(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
        info!(
            app_id = %app_id,
            scope_id = %scope_id,
            time = %timestamp(ctx),
            "scope created"
        );
    }

    fn on_scope_deleted(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
        info!(
            app_id = %app_id,
            scope_id = %scope_id,
            time = %timestamp(ctx),
            "scope deleted"
        );
    }

    fn on_scope_joined(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str) {
        info!(
            app_id = %app_id,
            scope_id = %scope_id,
            user_id = %user_id,
            time = %timestamp(ctx),
            "user joined scope"
        );
    }

    fn on_scope_left(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str) {
        info!(
            app_id = %app_id,
            scope_id = %scope_id,
            user_id = %user_id,
            time = %timestamp(ctx),
            "user left scope"
        );
    }

    fn on_unknown_type(&self, event_type: &str, fields: &Notification) {
        error!(
            event_type = ?event_type,
            field_count = fields.len(),
            "unknown notification type"
        );
    }

    fn on_missing_type(&self, fields: &Notification) {
        warn!(field_count = fields.len(), "notification is missing type");
    }
}
