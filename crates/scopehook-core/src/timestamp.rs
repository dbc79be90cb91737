//! Parsing of the `timestamp` notification field.
//!
//! The platform sends seconds since the Unix epoch as a decimal string,
//! optionally with a fractional part (`1400000000.5`).

use chrono::{DateTime, Utc};

use crate::errors::DispatchError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Parses a seconds-since-epoch value into a UTC instant.
///
/// Surrounding whitespace is ignored. Non-numeric input, NaN, infinities
/// and instants chrono cannot represent are rejected with
/// [`DispatchError::InvalidTimestamp`] carrying the raw value.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DispatchError> {
    let invalid = || DispatchError::InvalidTimestamp {
        raw: raw.to_string(),
    };

    let seconds: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if !seconds.is_finite() {
        return Err(invalid());
    }

    let whole = seconds.floor();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Err(invalid());
    }

    let mut secs = whole as i64;
    let mut nanos = ((seconds - whole) * f64::from(NANOS_PER_SECOND)).round() as u32;
    if nanos >= NANOS_PER_SECOND {
        secs += 1;
        nanos -= NANOS_PER_SECOND;
    }

    DateTime::from_timestamp(secs, nanos).ok_or_else(invalid)
}
