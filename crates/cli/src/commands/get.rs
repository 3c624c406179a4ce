//! `get` command: print one key's value.
//!
//! Responsibilities:
//! - Print the first value, every value, or a typed interpretation of a key.
//! - Fall back to `--default` when the key is absent.
//!
//! Does NOT handle:
//! - Loading the file (see `commands::load_table`).

use anyhow::Result;
use dotbind_config::EnvTable;

use crate::args::ValueType;

/// Render the requested value of `key` as output lines.
pub fn render(
    table: &EnvTable,
    key: &str,
    all: bool,
    default: Option<&str>,
    value_type: ValueType,
) -> Result<Vec<String>> {
    if !table.contains(key)
        && let Some(default) = default
    {
        return Ok(vec![default.to_string()]);
    }

    if all {
        let values = table.get_all(key)?;
        if values.is_empty() {
            // get_all is lenient on absent keys; report it like get does.
            table.get(key)?;
        }
        return Ok(values.to_vec());
    }

    let line = match value_type {
        ValueType::String => table.get(key)?.to_string(),
        ValueType::Bool => table.get_bool(key)?.to_string(),
        ValueType::Int => table.get_int(key)?.to_string(),
        ValueType::Duration => humantime::format_duration(table.get_duration(key)?).to_string(),
    };
    Ok(vec![line])
}

pub fn run(
    table: &EnvTable,
    key: &str,
    all: bool,
    default: Option<&str>,
    value_type: ValueType,
) -> Result<()> {
    for line in render(table, key, all, default, value_type)? {
        println!("{line}");
    }
    Ok(())
}
