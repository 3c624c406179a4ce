//! CLI command implementations.

pub mod check;
pub mod get;
pub mod list;

use anyhow::{Context, Result};
use dotbind_config::EnvTable;
use std::path::Path;

/// Load the dotenv file every command reads from.
pub fn load_table(path: &Path) -> Result<EnvTable> {
    EnvTable::from_path(path).with_context(|| format!("cannot load {}", path.display()))
}
