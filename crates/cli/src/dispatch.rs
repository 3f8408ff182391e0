//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Resolve the output format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    match cli.command {
        Commands::Check {
            schema,
            env_file,
            redact,
        } => commands::check::run(&schema, env_file, format, redact, cli.quiet),
        Commands::Schema { schema } => commands::schema::run(&schema, format),
    }
}
