//! Process environment access for the loader.
//!
//! Responsibilities:
//! - Snapshot the process environment into a plain string map.
//! - Evaluate the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Parsing or exporting env files (see `builder.rs`, which delegates to dotenvy).
//! - Coercing values (see `validate.rs`).
//!
//! Invariants:
//! - Variables whose name or value is not valid Unicode are left out of snapshots.

use std::collections::BTreeMap;

use crate::constants::{DOTENV_DISABLED_VALUES, DOTENV_DISABLED_VAR};

/// Check if env file loading is disabled via `DOTENV_DISABLED`.
pub(crate) fn dotenv_disabled() -> bool {
    std::env::var(DOTENV_DISABLED_VAR)
        .ok()
        .is_some_and(|value| DOTENV_DISABLED_VALUES.contains(&value.as_str()))
}

/// Copy the current process environment.
pub(crate) fn ambient_snapshot() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
