//! Error types for environment loading and validation.
//!
//! Responsibilities:
//! - Define the file errors raised while reading an env file.
//! - Define the validation errors raised while coercing schema values.
//! - Provide a unified `EnvError` for callers of the full validate operation.
//!
//! Does NOT handle:
//! - Schema document errors (see `schema_file.rs`).
//! - Rendering errors for terminals (the CLI decides how to print them).
//!
//! Invariants:
//! - Every variant carries the path or variable name it concerns.
//! - A missing env file is never an error; only unreadable or malformed files are.
//! - File errors NEVER include raw env file line contents to prevent secret leakage.
//! - Validation errors never include the offending raw value for the same reason.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::ValueType;

/// Failure to read or parse an env file that exists.
#[derive(Error, Debug)]
pub enum FileError {
    /// The file has invalid syntax.
    ///
    /// SAFETY: Only the byte index of the failure is kept, NOT the offending
    /// line, so secrets on that line never reach logs.
    #[error(
        "Failed to parse env file {} at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip env file loading",
        .path.display()
    )]
    Parse { path: PathBuf, error_index: usize },

    /// The file exists but could not be read.
    #[error("Failed to read env file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error(
        "Failed to load env file {}. Hint: set DOTENV_DISABLED=1 to skip env file loading",
        .path.display()
    )]
    Unknown { path: PathBuf },
}

impl FileError {
    /// Path of the env file that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::Parse { path, .. } | Self::Io { path, .. } | Self::Unknown { path } => path,
        }
    }
}

/// A schema variable that is absent or cannot be coerced to its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No value, or an empty value, after merging the env file and process environment.
    #[error("Missing env variable: {key}{}", searched_suffix(.searched.as_deref()))]
    Missing {
        key: String,
        /// Env file consulted for the value, if any.
        searched: Option<PathBuf>,
    },

    /// A value is present but does not parse as the declared type.
    #[error("{key} must be a valid {expected}")]
    TypeMismatch { key: String, expected: ValueType },
}

impl ValidationError {
    /// Name of the offending variable.
    pub fn key(&self) -> &str {
        match self {
            Self::Missing { key, .. } | Self::TypeMismatch { key, .. } => key,
        }
    }
}

fn searched_suffix(searched: Option<&Path>) -> String {
    match searched {
        Some(path) => format!(" (searched {})", path.display()),
        None => String::new(),
    }
}

/// Any failure of the combined load-and-validate operation.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    File(#[from] FileError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl EnvError {
    /// Name of the offending variable, for validation failures.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.key()),
            Self::File(_) => None,
        }
    }

    pub fn is_file_error(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::Missing { .. }))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::Validation(ValidationError::TypeMismatch { .. }))
    }
}
