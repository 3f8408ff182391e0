//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envguard")]
#[command(about = "Validate environment variables against a typed schema", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envguard check --schema env.schema.json\n  envguard check -s env.schema.yaml --env-file deploy/.env -o json\n  envguard schema -s env.schema.json\n"
)]
pub struct Cli {
    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Suppress the env file notice on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the environment against a schema and print the typed values
    Check {
        /// Schema document (.json, .yaml or .yml)
        #[arg(short, long, env = "ENVGUARD_SCHEMA", value_name = "FILE")]
        schema: PathBuf,

        /// Env file to load (defaults to .env in the working directory)
        #[arg(short, long, env = "ENVGUARD_ENV_FILE", value_name = "PATH")]
        env_file: Option<PathBuf>,

        /// Mask every value in the output
        #[arg(long)]
        redact: bool,
    },

    /// Parse a schema document and print its declarations
    Schema {
        /// Schema document (.json, .yaml or .yml)
        #[arg(short, long, env = "ENVGUARD_SCHEMA", value_name = "FILE")]
        schema: PathBuf,
    },
}
