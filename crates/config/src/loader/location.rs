//! Env file location requested by a caller.

use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_ENV_FILE;

/// Which env file to load.
///
/// The path is only honored when `load` is true and the path is non-empty;
/// otherwise the loader falls back to `.env` in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLocation {
    pub path: PathBuf,
    pub load: bool,
}

impl EnvLocation {
    /// A location that will be loaded.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            load: true,
        }
    }

    /// Effective env file path for an optional caller location.
    pub fn resolve(location: Option<&EnvLocation>) -> PathBuf {
        match location {
            Some(loc) if loc.load && !loc.path.as_os_str().is_empty() => loc.path.clone(),
            _ => PathBuf::from(DEFAULT_ENV_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
