//! Declared value types for schema entries.
//!
//! Responsibilities:
//! - Define the closed set of types a schema entry may declare.
//! - Render the lowercase type tokens used in schema documents.
//!
//! Invariants:
//! - The token set is exactly `number`, `string`, `boolean`.
//! - `Display` output matches the serialized token so error messages and
//!   schema documents use the same words.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type a schema declares for one environment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Parsed as a finite `f64`.
    Number,
    /// Passed through unchanged.
    String,
    /// `true` or `false`, any letter case.
    Boolean,
}

impl ValueType {
    /// The schema token for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
