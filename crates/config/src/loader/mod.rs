//! Env file loading for schema validation.
//!
//! Responsibilities:
//! - Resolve which env file to read and parse it through dotenvy.
//! - Merge env file values under the process environment into a `RawEnvironment`.
//! - Provide a caller-owned `EnvLoader` with opt-in caching.
//! - Enforce the `DOTENV_DISABLED` gate to allow hermetic test runs.
//!
//! Does NOT handle:
//! - Type coercion (see `validate.rs`).
//! - Schema documents on disk (see `schema_file.rs`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over env file values.
//! - A missing env file is not an error.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.

mod builder;
mod env;
mod error;
mod location;
mod raw;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use error::{EnvError, FileError, ValidationError};
pub use location::EnvLocation;
pub use raw::{LoadOrigin, RawEnvironment};
