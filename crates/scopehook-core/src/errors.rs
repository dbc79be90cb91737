use thiserror::Error;

/// Errors surfaced by [`crate::dispatch`].
///
/// Authentication failures and unknown or missing event types are not
/// errors; they are reported through result values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The `timestamp` field is not a finite number of seconds.
    #[error("invalid timestamp '{raw}'")]
    InvalidTimestamp {
        /// Offending raw field value.
        raw: String,
    },
}
