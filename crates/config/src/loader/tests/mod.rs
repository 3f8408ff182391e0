//! Tests for the env loader.
//!
//! Responsibilities:
//! - Test env file parsing, missing-file tolerance, and the `DOTENV_DISABLED` gate.
//! - Test precedence between process environment and env file values.
//! - Test opt-in caching and its first-path-wins behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `env_lock()` for additional synchronization.
//! - Variables an env file may export are unset around each test by `with_clean_env`,
//!   so temp-env removes them again afterwards.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::TempDir;

pub mod env_tests;

/// Variables the test env files define, plus the loader gate.
const TEST_VARS: [&str; 5] = ["PORT", "DEBUG", "NAME", "SECRET_TOKEN", "DOTENV_DISABLED"];

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every test variable unset except those given in `vars`.
pub fn with_clean_env<R>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> R) -> R {
    let mut kvs: Vec<(&str, Option<&str>)> = TEST_VARS
        .iter()
        .filter(|key| !vars.iter().any(|(k, _)| k == *key))
        .map(|key| (*key, None))
        .collect();
    kvs.extend_from_slice(vars);
    temp_env::with_vars(kvs, f)
}

/// Write an env file named `name` into `dir` and return its path.
pub fn write_env_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
