//! Table formatter implementation.
//!
//! Responsibilities:
//! - Render configs and schemas as aligned, human-readable columns.
//!
//! Does NOT handle:
//! - Machine-readable output (see `json` and `yaml`).

use anyhow::Result;
use envguard_config::{Schema, ValidatedConfig};

use crate::formatters::{Formatter, REDACTED_VALUE};

const EMPTY_MESSAGE: &str = "No variables declared.\n";

/// Minimum width of the NAME column.
const NAME_WIDTH: usize = 20;

/// Table formatter.
pub struct TableFormatter;

fn name_width<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.map(str::len).max().unwrap_or(0).max(NAME_WIDTH)
}

impl Formatter for TableFormatter {
    fn format_config(&self, config: &ValidatedConfig, redact: bool) -> Result<String> {
        if config.is_empty() {
            return Ok(EMPTY_MESSAGE.to_string());
        }

        let width = name_width(config.keys());
        let mut output = format!("{:<width$} {:<8} {}\n", "NAME", "TYPE", "VALUE");
        for (key, value) in config.iter() {
            let shown = if redact {
                REDACTED_VALUE.to_string()
            } else {
                value.to_string()
            };
            output.push_str(&format!(
                "{:<width$} {:<8} {}\n",
                key,
                value.value_type(),
                shown
            ));
        }

        Ok(output)
    }

    fn format_schema(&self, schema: &Schema) -> Result<String> {
        if schema.is_empty() {
            return Ok(EMPTY_MESSAGE.to_string());
        }

        let width = name_width(schema.keys());
        let mut output = format!("{:<width$} {}\n", "NAME", "TYPE");
        for (key, ty) in schema.iter() {
            output.push_str(&format!("{:<width$} {}\n", key, ty));
        }

        Ok(output)
    }
}
