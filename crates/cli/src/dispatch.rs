//! Command dispatch logic.
//!
//! Responsibilities:
//! - Load the dotenv file named by `--file`.
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let table = commands::load_table(&cli.file)?;
    tracing::debug!(path = %cli.file.display(), keys = table.len(), "loaded env file");

    match cli.command {
        Commands::Get {
            key,
            all,
            default,
            value_type,
        } => commands::get::run(&table, &key, all, default.as_deref(), value_type)?,
        Commands::List { format, keys_only } => commands::list::run(&table, format, keys_only)?,
        Commands::Check => commands::check::run(&cli.file, &table)?,
    }

    Ok(())
}
