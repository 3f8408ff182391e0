//! Schema documents on disk.
//!
//! Responsibilities:
//! - Read a schema from a JSON or YAML file, chosen by extension.
//!
//! Does NOT handle:
//! - Schema semantics such as duplicate detection (see `types/schema.rs`).
//!
//! Invariants:
//! - `.json` is parsed as JSON; `.yaml` and `.yml` as YAML; anything else is rejected.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::Schema;

/// Supported schema document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

impl SchemaFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors reading a schema document.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read schema file at {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema file at {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported schema file extension for {} (expected .json, .yaml or .yml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn parse_schema(path: &Path, text: &str, format: SchemaFormat) -> Result<Schema, SchemaError> {
    let parsed = match format {
        SchemaFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        SchemaFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| SchemaError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

/// Read and parse the schema document at `path`.
pub fn load_schema(path: &Path) -> Result<Schema, SchemaError> {
    let format = SchemaFormat::from_path(path).ok_or_else(|| SchemaError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_schema(path, &text, format)
}
