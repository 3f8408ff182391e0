//! Schema-driven environment validation for envguard.
//!
//! This crate loads `.env` files, merges them under the process environment,
//! and coerces the variables a schema declares into typed values. It fails
//! fast on the first missing or malformed variable.
//!
//! ```no_run
//! use envguard_config::{EnvLocation, Schema, validate_env};
//!
//! let schema = Schema::new().number("PORT").boolean("DEBUG").string("NAME");
//! let config = validate_env(&schema, Some(&EnvLocation::new("deploy/.env")))?;
//! let port = config.number("PORT");
//! # Ok::<(), envguard_config::EnvError>(())
//! ```

pub mod constants;
mod loader;
pub mod schema_file;
pub mod types;
mod validate;

pub use loader::{
    EnvError, EnvLoader, EnvLocation, FileError, LoadOrigin, RawEnvironment, ValidationError,
};
pub use schema_file::{SchemaError, SchemaFormat, load_schema};
pub use types::{EnvValue, Schema, ValidatedConfig, ValueType};
pub use validate::{coerce, validate_env, validate_raw};
