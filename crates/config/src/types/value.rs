//! Coerced environment values.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValueType;

/// A single environment value after coercion to its declared type.
///
/// Serialized untagged, so JSON output is a plain number, boolean or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Number(f64),
    Bool(bool),
    Str(String),
}

impl EnvValue {
    /// The declared type this value satisfies.
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Number(_) => ValueType::Number,
            Self::Bool(_) => ValueType::Boolean,
            Self::Str(_) => ValueType::String,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<f64> for EnvValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for EnvValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
