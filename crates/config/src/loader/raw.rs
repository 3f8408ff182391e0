//! Raw, uncoerced environment snapshots.
//!
//! Responsibilities:
//! - Hold the merged view of process environment and env file values.
//! - Record where the env file values came from, for reporting and error context.
//!
//! Invariants:
//! - Process environment values take precedence over env file values.
//! - Within one env file, the first definition of a key wins.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where the env file portion of a [`RawEnvironment`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOrigin {
    /// The env file at this path was read.
    File(PathBuf),
    /// No env file existed at this path; only process values are present.
    NotFound(PathBuf),
    /// Loading was skipped because `DOTENV_DISABLED` is set.
    Disabled,
    /// Reused from an earlier load of this path by a caching loader.
    Cached(PathBuf),
    /// Built directly from key/value pairs, without touching any file.
    Inline,
}

impl LoadOrigin {
    /// Env file path consulted for this snapshot, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) | Self::NotFound(path) | Self::Cached(path) => Some(path),
            Self::Disabled | Self::Inline => None,
        }
    }
}

/// Variable name to raw string value, before any type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEnvironment {
    vars: BTreeMap<String, String>,
    origin: LoadOrigin,
}

impl RawEnvironment {
    pub(crate) fn new(vars: BTreeMap<String, String>, origin: LoadOrigin) -> Self {
        Self { vars, origin }
    }

    /// Add env file entries underneath the values already present.
    pub(crate) fn merge_file_entries(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        for (key, value) in entries {
            self.vars.entry(key).or_insert(value);
        }
    }

    pub(crate) fn with_origin(mut self, origin: LoadOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn origin(&self) -> &LoadOrigin {
        &self.origin
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = Self::new(BTreeMap::new(), LoadOrigin::Inline);
        raw.merge_file_entries(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
        raw
    }
}
