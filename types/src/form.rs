//! `application/x-www-form-urlencoded` request bodies.

use std::collections::BTreeMap;

use crate::TransportError;

/// Key/value pairs sent as a POST body.
///
/// Keys are kept sorted so the encoded body is stable regardless of the
/// order fields were set in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormBody {
    fields: BTreeMap<String, String>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Set a field only when `value` is non-empty.
    pub fn set_non_empty(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.fields.insert(key.into(), value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `key=value&key=value`, percent-escaping as needed.
    pub fn encode(&self) -> Result<String, TransportError> {
        serde_urlencoded::to_string(&self.fields)
            .map_err(|e| TransportError::Build(format!("form encoding: {e}")))
    }
}
