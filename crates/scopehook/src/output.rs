//! Output formatting utilities.

use scopehook_core::{field, parse_timestamp, EventType, Notification, VerifyResult};
use serde_json::json;

/// Verification result with the fields worth showing next to it.
pub struct Verdict {
    pub result: VerifyResult,
    pub event_type: EventType,
    pub timestamp: Option<String>,
}

impl Verdict {
    pub fn new(result: VerifyResult, fields: &Notification) -> Self {
        // An unparseable timestamp is shown raw; verification does not depend on it.
        let timestamp = fields.get(field::TIMESTAMP).map(|raw| {
            parse_timestamp(raw)
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|_| raw.to_string())
        });
        Self {
            result,
            event_type: EventType::classify(fields.get(field::TYPE)),
            timestamp,
        }
    }
}

/// Formats a verdict as JSON.
pub fn format_json(verdict: &Verdict) -> String {
    let value = json!({
        "result": verdict.result.to_string(),
        "authentic": verdict.result.is_authentic(),
        "type": verdict.event_type.as_str(),
        "timestamp": verdict.timestamp,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a verdict as a simple table row.
pub fn format_table_row(verdict: &Verdict) -> String {
    format!(
        "{:<20} {:<20} {}",
        verdict.result.to_string(),
        truncate(&verdict.event_type.to_string(), 20),
        verdict.timestamp.as_deref().unwrap_or("-")
    )
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<20} {:<20} {}", "RESULT", "TYPE", "TIMESTAMP");
    println!("{}", "-".repeat(70));
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
