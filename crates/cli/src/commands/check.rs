//! Check command implementation.
//!
//! Loads the schema, reads the env file once, validates, and prints the typed
//! values. The notice about which env file was used goes to stderr.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

use envguard_config::{EnvLoader, EnvLocation, LoadOrigin, load_schema, validate_raw};

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(
    schema_path: &Path,
    env_file: Option<PathBuf>,
    format: OutputFormat,
    redact: bool,
    quiet: bool,
) -> Result<()> {
    let schema = load_schema(schema_path)?;
    info!(
        schema = %schema_path.display(),
        variables = schema.len(),
        "Loaded schema"
    );

    // The CLI process exits right after validating, so exporting would have no effect.
    let location = env_file.map(EnvLocation::new);
    let raw = EnvLoader::new()
        .with_export(false)
        .load(location.as_ref())?;

    if !quiet {
        eprintln!("{}", load_notice(raw.origin()));
    }

    let config = validate_raw(&schema, &raw)?;
    info!(variables = config.len(), "Environment validated");

    let formatter = get_formatter(format);
    print!("{}", formatter.format_config(&config, redact)?);

    Ok(())
}

fn load_notice(origin: &LoadOrigin) -> String {
    match origin {
        LoadOrigin::File(path) | LoadOrigin::Cached(path) => {
            format!("Loaded environment from {}", path.display())
        }
        LoadOrigin::NotFound(path) => format!(
            "No env file at {}; using process environment",
            path.display()
        ),
        LoadOrigin::Disabled => {
            "Env file loading disabled by DOTENV_DISABLED; using process environment".to_string()
        }
        LoadOrigin::Inline => "Using inline environment".to_string(),
    }
}
