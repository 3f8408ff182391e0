//! envguard - validate process environment against a typed schema.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging on stderr so stdout stays machine readable.
//! - Map command failures to structured exit codes.
//!
//! Does NOT handle:
//! - Env file loading or coercion (see `crates/config`).
//!
//! Invariants:
//! - Command output goes to stdout; notices, logs, and errors go to stderr.
//! - RUST_LOG overrides the `-v` verbosity level when set.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_log_level(cli.verbose))),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
