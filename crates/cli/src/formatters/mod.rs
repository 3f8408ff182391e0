//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table, JSON, and YAML renderings of validated configs and schemas.
//! - Mask values when redaction is requested.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - Variables are rendered in schema declaration order.
//! - Machine-readable formats produce valid documents even when empty (`{}`).
//! - The table format prints a human message when there is nothing to show.
//! - Every returned string ends with a newline.

use anyhow::Result;
use serde::ser::{Serialize, SerializeMap, Serializer};

use envguard_config::{Schema, ValidatedConfig};

mod json;
mod table;
mod yaml;


pub use json::JsonFormatter;
pub use table::TableFormatter;
pub use yaml::YamlFormatter;

/// Placeholder printed instead of a value when `--redact` is set.
pub const REDACTED_VALUE: &str = "****";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => anyhow::bail!(
                "Invalid output format: {}. Valid options: table, json, yaml",
                s
            ),
        }
    }
}

/// Trait for formatting validation output.
pub trait Formatter {
    /// Format the typed values produced by a successful check.
    fn format_config(&self, config: &ValidatedConfig, redact: bool) -> Result<String>;

    /// Format the declarations of a schema document.
    fn format_schema(&self, schema: &Schema) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Yaml => Box::new(YamlFormatter),
    }
}

/// Serializes a config as a map with every value replaced by [`REDACTED_VALUE`].
pub(crate) struct Redacted<'a>(pub &'a ValidatedConfig);

impl Serialize for Redacted<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for key in self.0.keys() {
            map.serialize_entry(key, REDACTED_VALUE)?;
        }
        map.end()
    }
}
