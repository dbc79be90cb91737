//! Event type classification.

use std::fmt;

/// Declared type of a notification.
///
/// Classification never fails: type strings this crate does not know yet
/// land in [`EventType::Unknown`] with the raw value preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A scope was created.
    ScopeCreated,
    /// A scope was deleted.
    ScopeDeleted,
    /// A user joined a scope.
    ScopeJoined,
    /// A user left a scope.
    ScopeLeft,
    /// Unrecognized type string.
    Unknown(String),
    /// The notification has no `type` field.
    Missing,
}

impl EventType {
    /// Classifies the raw value of the `type` field.
    pub fn classify(raw: Option<&str>) -> Self {
        match raw {
            None => EventType::Missing,
            Some("ScopeCreated") => EventType::ScopeCreated,
            Some("ScopeDeleted") => EventType::ScopeDeleted,
            Some("ScopeJoined") => EventType::ScopeJoined,
            Some("ScopeLeft") => EventType::ScopeLeft,
            Some(other) => EventType::Unknown(other.to_string()),
        }
    }

    /// Wire name of the type; `None` for [`EventType::Missing`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventType::ScopeCreated => Some("ScopeCreated"),
            EventType::ScopeDeleted => Some("ScopeDeleted"),
            EventType::ScopeJoined => Some("ScopeJoined"),
            EventType::ScopeLeft => Some("ScopeLeft"),
            EventType::Unknown(raw) => Some(raw),
            EventType::Missing => None,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or("<missing>"))
    }
}
