//! Schema validation and type coercion.
//!
//! Responsibilities:
//! - Coerce raw string values to the type each schema entry declares.
//! - Walk a schema in declaration order and fail on the first bad variable.
//!
//! Does NOT handle:
//! - Reading env files or the process environment (see `loader` module).
//!
//! Invariants:
//! - An absent key and an empty value are both reported as missing.
//! - Strings pass through untouched: no trimming, no case folding.
//! - Numbers tolerate surrounding whitespace and must be finite.
//! - Booleans are exactly `true` or `false` in any ASCII letter case, untrimmed.
//! - Raw values are never logged or placed in error messages.

use tracing::debug;

use crate::loader::{EnvError, EnvLoader, EnvLocation, RawEnvironment, ValidationError};
use crate::types::{EnvValue, Schema, ValidatedConfig, ValueType};

/// Load the env file at `location` (or `.env`) and validate `schema` against it.
///
/// Uses a fresh, non-caching [`EnvLoader`]. Keep an `EnvLoader` around instead
/// when repeated calls should share one loaded snapshot.
pub fn validate_env(
    schema: &Schema,
    location: Option<&EnvLocation>,
) -> Result<ValidatedConfig, EnvError> {
    EnvLoader::new().validate(schema, location)
}

/// Validate `schema` against an already loaded environment.
pub fn validate_raw(
    schema: &Schema,
    raw: &RawEnvironment,
) -> Result<ValidatedConfig, ValidationError> {
    let mut config = ValidatedConfig::with_capacity(schema.len());

    for (key, ty) in schema.iter() {
        let value = match raw.get(key) {
            Some(value) if !value.is_empty() => value,
            _ => {
                return Err(ValidationError::Missing {
                    key: key.to_string(),
                    searched: raw.origin().path().map(|p| p.to_path_buf()),
                });
            }
        };

        let coerced = coerce(key, value, ty)?;
        debug!(key, ty = %ty, "Validated environment variable");
        config.push(key.to_string(), coerced);
    }

    Ok(config)
}

/// Coerce a single raw value to `ty`.
///
/// `key` only names the variable in the error.
pub fn coerce(key: &str, raw: &str, ty: ValueType) -> Result<EnvValue, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        key: key.to_string(),
        expected: ty,
    };

    match ty {
        ValueType::String => Ok(EnvValue::Str(raw.to_string())),
        ValueType::Number => parse_number(raw).map(EnvValue::Number).ok_or_else(mismatch),
        ValueType::Boolean => parse_bool(raw).map(EnvValue::Bool).ok_or_else(mismatch),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(value) = parse_prefixed_integer(trimmed) {
        return Some(value);
    }

    // Stricter than a NaN-only check: infinities and overflow to infinity are rejected.
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Unsigned `0x`, `0o` and `0b` integer literals that fit in 128 bits.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    // from_str_radix would accept a sign here
    if digits.starts_with(['+', '-']) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
