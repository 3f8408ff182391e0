//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map envguard-config errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use envguard_config::{EnvError, FileError, ValidationError};

/// Structured exit codes for envguard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - every schema variable validated.
    Success = 0,

    /// General error - bad arguments, unreadable schema, or output failure.
    GeneralError = 1,

    /// The env file exists but could not be read or parsed.
    EnvFileError = 2,

    /// A schema variable has no value.
    MissingVariable = 3,

    /// A schema variable has a value that does not match its declared type.
    InvalidValue = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ValidationError> for ExitCode {
    fn from(err: &ValidationError) -> Self {
        match err {
            ValidationError::Missing { .. } => ExitCode::MissingVariable,
            ValidationError::TypeMismatch { .. } => ExitCode::InvalidValue,
        }
    }
}

impl From<&EnvError> for ExitCode {
    fn from(err: &EnvError) -> Self {
        match err {
            EnvError::File(_) => ExitCode::EnvFileError,
            EnvError::Validation(inner) => Self::from(inner),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no envguard error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<EnvError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ValidationError>() {
                return ExitCode::from(err);
            }
            if cause.downcast_ref::<FileError>().is_some() {
                return ExitCode::EnvFileError;
            }
        }

        ExitCode::GeneralError
    }
}
