//! dotbind - inspect dotenv files from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the dotenv file through `dotbind-config` and print what it holds.
//!
//! Does NOT handle:
//! - Parsing rules or struct binding (see `crates/config`).
//!
//! Invariants:
//! - Logs go to stderr so stdout stays machine-readable.
//! - Errors map to structured exit codes (see `error` module).

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
