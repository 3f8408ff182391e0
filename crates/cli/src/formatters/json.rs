//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format configs and schemas as pretty-printed JSON objects.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use envguard_config::{Schema, ValidatedConfig};

use crate::formatters::{Formatter, Redacted};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_config(&self, config: &ValidatedConfig, redact: bool) -> Result<String> {
        let mut output = if redact {
            serde_json::to_string_pretty(&Redacted(config))?
        } else {
            serde_json::to_string_pretty(config)?
        };
        output.push('\n');
        Ok(output)
    }

    fn format_schema(&self, schema: &Schema) -> Result<String> {
        let mut output = serde_json::to_string_pretty(schema)?;
        output.push('\n');
        Ok(output)
    }
}
