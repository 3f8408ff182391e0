//! Schema command implementation.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use envguard_config::load_schema;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(schema_path: &Path, format: OutputFormat) -> Result<()> {
    let schema = load_schema(schema_path)?;
    info!(
        schema = %schema_path.display(),
        variables = schema.len(),
        "Loaded schema"
    );

    let formatter = get_formatter(format);
    print!("{}", formatter.format_schema(&schema)?);

    Ok(())
}
