//! YAML formatter implementation.
//!
//! Responsibilities:
//! - Format configs and schemas as YAML mappings.
//! - Schema output can be saved and fed back to `--schema`.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use envguard_config::{Schema, ValidatedConfig};

use crate::formatters::{Formatter, Redacted};

/// YAML formatter.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format_config(&self, config: &ValidatedConfig, redact: bool) -> Result<String> {
        if redact {
            Ok(serde_yaml::to_string(&Redacted(config))?)
        } else {
            Ok(serde_yaml::to_string(config)?)
        }
    }

    fn format_schema(&self, schema: &Schema) -> Result<String> {
        Ok(serde_yaml::to_string(schema)?)
    }
}
