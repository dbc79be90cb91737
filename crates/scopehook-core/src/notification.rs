use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::signer::{sign, SecretKey};

/// Field names recognized by signing and dispatch.
///
/// Names are case-sensitive and matched exactly.
pub mod field {
    /// Event type (`ScopeCreated`, `ScopeJoined`, ...).
    pub const TYPE: &str = "type";
    /// Seconds since the Unix epoch, possibly fractional.
    pub const TIMESTAMP: &str = "timestamp";
    /// Application identifier.
    pub const APP: &str = "appId";
    /// Scope identifier.
    pub const SCOPE: &str = "scopeId";
    /// User identifier (join/leave events).
    pub const USER: &str = "userId";
    /// Hex signature over every other field.
    pub const SIGNATURE: &str = "signature";
}

/// One inbound notification as a flat field mapping.
///
/// Built once by a transport adapter and read-only afterwards. Fields the
/// dispatcher does not recognize are kept, because they still take part in
/// the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notification {
    fields: BTreeMap<String, String>,
}

impl Notification {
    /// Returns the value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns true if `name` is present.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields, `signature` included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the notification carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over `(name, value)` pairs in ascending byte order of name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The supplied `signature` value, if any.
    pub fn signature(&self) -> Option<&str> {
        self.get(field::SIGNATURE)
    }

    /// Returns a copy carrying a freshly computed `signature` field.
    ///
    /// Any existing signature is replaced; it never contributes to the new one.
    pub fn signed(&self, key: &SecretKey) -> Notification {
        let signature = sign(key, self);
        let mut fields = self.fields.clone();
        fields.insert(field::SIGNATURE.to_string(), signature);
        Notification { fields }
    }
}

/// Collects pairs into a notification. The first occurrence of a name wins.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Notification {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = BTreeMap::new();
        for (name, value) in iter {
            fields.entry(name.into()).or_insert_with(|| value.into());
        }
        Notification { fields }
    }
}

impl From<BTreeMap<String, String>> for Notification {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Notification { fields }
    }
}

impl From<HashMap<String, String>> for Notification {
    fn from(fields: HashMap<String, String>) -> Self {
        Notification {
            fields: fields.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let n: Notification = [("type", "ScopeCreated"), ("type", "ScopeDeleted")]
            .into_iter()
            .collect();
        assert_eq!(n.get("type"), Some("ScopeCreated"));
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let n: Notification = [("Type", "ScopeCreated")].into_iter().collect();
        assert!(!n.contains(field::TYPE));
        assert_eq!(n.get("Type"), Some("ScopeCreated"));
    }

    #[test]
    fn signed_returns_a_new_notification() {
        let n: Notification = [("type", "ScopeLeft")].into_iter().collect();
        let signed = n.signed(&SecretKey::new("k"));
        assert!(n.signature().is_none());
        assert_eq!(signed.signature().map(str::len), Some(64));
    }

    #[test]
    fn serializes_as_flat_object() {
        let n: Notification = [("appId", "a1"), ("type", "ScopeCreated")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"appId":"a1","type":"ScopeCreated"}"#);
    }
}
