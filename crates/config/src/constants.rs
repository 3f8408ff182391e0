//! Centralized constants for envguard.

/// Env file consulted when the caller does not request a specific path.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Setting this to `1` or `true` skips env file loading entirely.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Values of [`DOTENV_DISABLED_VAR`] that disable loading.
pub const DOTENV_DISABLED_VALUES: [&str; 2] = ["1", "true"];
