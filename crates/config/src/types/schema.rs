//! Schema of expected environment variables.
//!
//! Responsibilities:
//! - Hold the ordered set of variable names and their declared types.
//! - Deserialize schema documents (`{"PORT": "number", ...}`) without losing key order.
//!
//! Does NOT handle:
//! - Reading schema documents from disk (see `schema_file.rs`).
//! - Validating values against the schema (see `validate.rs`).
//!
//! Invariants:
//! - Variable names are unique and non-empty.
//! - Iteration order is declaration order; re-inserting a name keeps its slot.
//! - Deserialization rejects duplicate names instead of letting the last one win.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValueType;

/// Ordered mapping from environment variable name to its declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    entries: Vec<(String, ValueType)>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `key` as a number.
    pub fn number(self, key: impl Into<String>) -> Self {
        self.with(key, ValueType::Number)
    }

    /// Declare `key` as a string.
    pub fn string(self, key: impl Into<String>) -> Self {
        self.with(key, ValueType::String)
    }

    /// Declare `key` as a boolean.
    pub fn boolean(self, key: impl Into<String>) -> Self {
        self.with(key, ValueType::Boolean)
    }

    /// Declare `key` with an explicit type.
    pub fn with(mut self, key: impl Into<String>, ty: ValueType) -> Self {
        self.insert(key, ty);
        self
    }

    /// Insert or replace a declaration, returning the previous type if any.
    ///
    /// A replaced declaration keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, ty: ValueType) -> Option<ValueType> {
        let key = key.into();
        match self.entries.iter_mut().find(|(name, _)| *name == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, ty)),
            None => {
                self.entries.push((key, ty));
                None
            }
        }
    }

    /// Declared type for `key`.
    pub fn get(&self, key: &str) -> Option<ValueType> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, ty)| *ty)
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

    /// Iterate declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ValueType)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Variable names in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, ValueType)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, ValueType)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (key, ty) in iter {
            schema.insert(key, ty);
        }
        schema
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = (&'a str, ValueType);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, ValueType)>,
        fn(&'a (String, ValueType)) -> (&'a str, ValueType),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn project(entry: &(String, ValueType)) -> (&str, ValueType) {
            (entry.0.as_str(), entry.1)
        }
        self.entries.iter().map(project)
    }
}

impl Serialize for Schema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, ty) in &self.entries {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}

struct SchemaVisitor;

impl<'de> Visitor<'de> for SchemaVisitor {
    type Value = Schema;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of variable names to \"number\", \"string\" or \"boolean\"")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut schema = Schema {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((key, ty)) = access.next_entry::<String, ValueType>()? {
            if key.is_empty() {
                return Err(de::Error::custom("variable name must not be empty"));
            }
            if schema.contains_key(&key) {
                return Err(de::Error::custom(format!(
                    "duplicate variable name '{}'",
                    key
                )));
            }
            schema.entries.push((key, ty));
        }
        Ok(schema)
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SchemaVisitor)
    }
}
