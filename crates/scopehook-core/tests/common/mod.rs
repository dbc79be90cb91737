#![allow(dead_code)]

use std::cell::RefCell;

use scopehook_core::{EventContext, HandlerSet, Notification};

/// One recorded handler invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Created(String, String),
    Deleted(String, String),
    Joined(String, String, String),
    Left(String, String, String),
    Unknown(String),
    Missing,
}

/// Handler set that records every callback it receives.
#[derive(Default)]
pub struct Recorder {
    pub calls: RefCell<Vec<Call>>,
    pub timestamps: RefCell<Vec<Option<i64>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn note(&self, ctx: &EventContext<'_>, call: Call) {
        self.timestamps
            .borrow_mut()
            .push(ctx.timestamp.map(|t| t.timestamp()));
        self.calls.borrow_mut().push(call);
    }
}

impl HandlerSet for Recorder {
    fn on_scope_created(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
        self.note(ctx, Call::Created(app_id.into(), scope_id.into()));
    }

    fn on_scope_deleted(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str) {
        self.note(ctx, Call::Deleted(app_id.into(), scope_id.into()));
    }

    fn on_scope_joined(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str) {
        self.note(ctx, Call::Joined(app_id.into(), scope_id.into(), user_id.into()));
    }

    fn on_scope_left(&self, ctx: &EventContext<'_>, app_id: &str, scope_id: &str, user_id: &str) {
        self.note(ctx, Call::Left(app_id.into(), scope_id.into(), user_id.into()));
    }

    fn on_unknown_type(&self, event_type: &str, _fields: &Notification) {
        self.calls.borrow_mut().push(Call::Unknown(event_type.into()));
    }

    fn on_missing_type(&self, _fields: &Notification) {
        self.calls.borrow_mut().push(Call::Missing);
    }
}

pub fn notification(pairs: &[(&str, &str)]) -> Notification {
    pairs.iter().copied().collect()
}
