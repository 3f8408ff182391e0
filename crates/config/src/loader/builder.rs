//! Env loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` owned by the caller.
//! - Read env files through dotenvy and merge them under the process environment.
//! - Optionally cache the first loaded snapshot for the loader's lifetime.
//!
//! Does NOT handle:
//! - Coercing values (delegated to validate.rs).
//! - Printing success or failure notices (left to the embedding program).
//!
//! Invariants / Assumptions:
//! - Process environment values take precedence over env file values.
//! - A missing env file yields an empty file contribution, not an error.
//! - The `DOTENV_DISABLED` variable is checked before any file is opened.
//! - With caching enabled, the first successful load wins: later calls return
//!   that snapshot even if they ask for a different path. Failed loads are not cached.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::env::{ambient_snapshot, dotenv_disabled};
use super::error::{EnvError, FileError};
use super::location::EnvLocation;
use super::raw::{LoadOrigin, RawEnvironment};
use crate::types::{Schema, ValidatedConfig};
use crate::validate::validate_raw;

/// Loads env files and validates schemas against the result.
///
/// Construct one per startup path and pass it down; the cache, when enabled,
/// belongs to this handle and is never shared with other loaders.
#[derive(Debug)]
pub struct EnvLoader {
    cache_enabled: bool,
    export: bool,
    cached: Option<(PathBuf, RawEnvironment)>,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader that exports file values and does not cache.
    pub fn new() -> Self {
        Self {
            cache_enabled: false,
            export: true,
            cached: None,
        }
    }

    /// Reuse the first successfully loaded snapshot on later calls.
    ///
    /// Once a snapshot is cached, the `path` of later locations is ignored.
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        if !enabled {
            self.cached = None;
        }
        self
    }

    /// Whether env file values are also written into the process environment.
    ///
    /// Existing process variables are never overridden either way.
    pub fn with_export(mut self, export: bool) -> Self {
        self.export = export;
        self
    }

    /// Path of the cached snapshot, if one is held.
    pub fn cached_path(&self) -> Option<&Path> {
        self.cached.as_ref().map(|(path, _)| path.as_path())
    }

    /// Load the raw environment for `location` (or `.env` when `None`).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The env file exists but has invalid syntax (`FileError::Parse`)
    /// - The env file exists but cannot be read due to I/O errors (`FileError::Io`)
    ///
    /// Missing env files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw env file line contents to prevent secret leakage.
    pub fn load(&mut self, location: Option<&EnvLocation>) -> Result<RawEnvironment, FileError> {
        let path = EnvLocation::resolve(location);

        if let Some((cached_path, raw)) = &self.cached {
            if *cached_path != path {
                warn!(
                    requested = %path.display(),
                    cached = %cached_path.display(),
                    "Env loader is caching; ignoring requested env file path"
                );
            }
            debug!(path = %cached_path.display(), "Reusing cached environment");
            return Ok(raw.clone().with_origin(LoadOrigin::Cached(cached_path.clone())));
        }

        let raw = self.load_uncached(&path)?;
        if self.cache_enabled {
            self.cached = Some((path, raw.clone()));
        }
        Ok(raw)
    }

    fn load_uncached(&self, path: &Path) -> Result<RawEnvironment, FileError> {
        let mut raw = RawEnvironment::new(ambient_snapshot(), LoadOrigin::Disabled);

        if dotenv_disabled() {
            debug!("DOTENV_DISABLED is set; skipping env file");
            return Ok(raw);
        }

        let entries = match read_env_file(path)? {
            Some(entries) => entries,
            None => {
                debug!(path = %path.display(), "No env file found; using process environment only");
                return Ok(raw.with_origin(LoadOrigin::NotFound(path.to_path_buf())));
            }
        };

        if self.export {
            // dotenvy never overrides variables that are already set
            dotenvy::from_path(path).map_err(|e| file_error(path, e))?;
            debug!(path = %path.display(), "Exported env file values into process environment");
        }

        info!(
            path = %path.display(),
            vars = entries.len(),
            "Loaded environment file"
        );
        raw.merge_file_entries(entries);
        Ok(raw.with_origin(LoadOrigin::File(path.to_path_buf())))
    }

    /// Load the environment and validate `schema` against it.
    ///
    /// Fails on the first missing or invalid variable; nothing partial is returned.
    pub fn validate(
        &mut self,
        schema: &Schema,
        location: Option<&EnvLocation>,
    ) -> Result<ValidatedConfig, EnvError> {
        let raw = self.load(location)?;
        Ok(validate_raw(schema, &raw)?)
    }
}

/// Parse an env file into ordered key/value pairs.
///
/// Returns `Ok(None)` when the file does not exist.
fn read_env_file(path: &Path) -> Result<Option<Vec<(String, String)>>, FileError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(e) if is_not_found(&e) => return Ok(None),
        Err(e) => return Err(file_error(path, e)),
    };

    iter.collect::<Result<Vec<_>, _>>()
        .map(Some)
        .map_err(|e| file_error(path, e))
}

fn file_error(path: &Path, err: dotenvy::Error) -> FileError {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::LineParse(_, idx) => FileError::Parse {
            path,
            error_index: idx,
        },
        dotenvy::Error::Io(source) => FileError::Io { path, source },
        _ => FileError::Unknown { path },
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
