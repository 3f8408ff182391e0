//! The typed result of a successful validation.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::EnvValue;

/// Environment values coerced to their declared types, in schema order.
///
/// Only [`crate::validate_raw`] and the loaders build this, so every schema key
/// is present and no other key is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedConfig {
    entries: Vec<(String, EnvValue)>,
}

impl ValidatedConfig {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, key: String, value: EnvValue) {
        self.entries.push((key, value));
    }

    pub fn get(&self, key: &str) -> Option<&EnvValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Numeric value for `key`, or `None` if absent or declared otherwise.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(EnvValue::as_f64)
    }

    /// Boolean value for `key`, or `None` if absent or declared otherwise.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(EnvValue::as_bool)
    }

    /// String value for `key`, or `None` if absent or declared otherwise.
    pub fn string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(EnvValue::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EnvValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl IntoIterator for ValidatedConfig {
    type Item = (String, EnvValue);
    type IntoIter = std::vec::IntoIter<(String, EnvValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ValidatedConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
