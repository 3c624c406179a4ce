//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the dotenv file path from flags or `DOTBIND_FILE`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not parse dotenv text (see `dotbind-config`).

use clap::{Parser, Subcommand, ValueEnum};
use dotbind_config::constants::DEFAULT_ENV_PATH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dotbind")]
#[command(about = "Inspect dotenv files the way dotbind-config loads them", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotbind get DATABASE_URL\n  dotbind get PORT --as int --default 8080\n  dotbind --file prod.env list --format json\n  dotbind check\n"
)]
pub struct Cli {
    /// Path to the dotenv file to read
    #[arg(short, long, global = true, env = "DOTBIND_FILE", default_value = DEFAULT_ENV_PATH)]
    pub file: PathBuf,

    /// Enable debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        /// Key to look up (case-sensitive)
        key: String,

        /// Print every value of a multi-value key, one per line
        #[arg(long, conflicts_with = "value_type")]
        all: bool,

        /// Value to print when the key is absent
        #[arg(short, long)]
        default: Option<String>,

        /// Interpret the first value as this type
        #[arg(long = "as", value_enum, default_value_t = ValueType::String)]
        value_type: ValueType,
    },

    /// List every loaded key and its values
    List {
        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Print keys only, hiding values
        #[arg(long)]
        keys_only: bool,
    },

    /// Load the file and report how many keys it defines
    Check,
}

/// Type a value is coerced to before printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    String,
    Bool,
    Int,
    Duration,
}

/// Output format for `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
