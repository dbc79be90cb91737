//! Transport adapters.
//!
//! Each adapter turns one wire format into the flat field mapping the core
//! consumes. Adapters never look at field meaning; a request that cannot be
//! parsed at all is rejected here, before signature checks.

use scopehook_core::Notification;
use serde_json::Value;

use crate::errors::AdapterError;

/// Builds a notification from a JSON object body.
///
/// Strings are taken verbatim and numbers keep their JSON text. Booleans
/// and `null` use the rendering senders sign with (`True`, `False`,
/// `None`), so a member the sender signed is always signed here too.
/// Nested arrays or objects have no agreed flat rendering and are rejected.
pub fn from_json(body: &[u8]) -> Result<Notification, AdapterError> {
    let Value::Object(members) = serde_json::from_slice::<Value>(body)? else {
        return Err(AdapterError::NotAnObject);
    };

    let mut pairs = Vec::with_capacity(members.len());
    for (name, value) in members {
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            Value::Null => "None".to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(AdapterError::UnsupportedValue { field: name })
            }
        };
        pairs.push((name, text));
    }
    Ok(pairs.into_iter().collect())
}

/// Builds a notification from decoded form or query pairs.
///
/// When a name repeats, the first value is used.
pub fn from_pairs<I, K, V>(pairs: I) -> Notification
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs.into_iter().collect()
}

/// Builds the combined view used by the POST endpoint.
///
/// Query parameters are consulted before form fields, so a name present in
/// both resolves to the query value.
pub fn from_query_and_form(
    query: Vec<(String, String)>,
    form: Vec<(String, String)>,
) -> Notification {
    from_pairs(query.into_iter().chain(form))
}
