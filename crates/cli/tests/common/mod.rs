//! Shared test utilities for envguard CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory rooted in a temp directory.
//! - Write schema and env files used by the scenarios.
//!
//! Invariants / Assumptions:
//! - Variables used by the scenarios are cleared so host values never leak in.
//! - `DOTENV_DISABLED` is cleared; tests that want it set do so explicitly.
//! - The working directory is the temp dir, so the default `.env` lookup
//!   only sees files the test wrote.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Variables the scenarios read or write.
pub const SCENARIO_VARS: [&str; 4] = ["PORT", "DEBUG", "NAME", "API_TOKEN"];

/// Returns a hermetic `envguard` command running inside `dir`.
pub fn envguard_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envguard");
    cmd.current_dir(dir);

    cmd.env_remove("DOTENV_DISABLED")
        .env_remove("ENVGUARD_SCHEMA")
        .env_remove("ENVGUARD_ENV_FILE")
        .env_remove("RUST_LOG");
    for key in SCENARIO_VARS {
        cmd.env_remove(key);
    }

    cmd
}

/// Writes the PORT/DEBUG/NAME schema as JSON and returns its path.
pub fn write_service_schema(dir: &Path) -> PathBuf {
    write_file(
        dir,
        "schema.json",
        r#"{"PORT": "number", "DEBUG": "boolean", "NAME": "string"}"#,
    )
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}
