//! `check` command: confirm a file loads and summarize it.

use anyhow::Result;
use dotbind_config::EnvTable;
use std::path::Path;

pub fn summary(path: &Path, table: &EnvTable) -> String {
    let values: usize = table.iter().map(|(_, values)| values.len()).sum();
    format!(
        "{}: {} keys, {} values",
        path.display(),
        table.len(),
        values
    )
}

pub fn run(path: &Path, table: &EnvTable) -> Result<()> {
    println!("{}", summary(path, table));
    Ok(())
}
