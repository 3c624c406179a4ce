//! `list` command: print every loaded key.
//!
//! Responsibilities:
//! - Render the table as aligned `KEY = values` lines or as a JSON object.
//! - Hide values entirely when `--keys-only` is set.
//!
//! Invariants:
//! - Keys are printed in sorted order.
//! - JSON output maps each key to an array of its values.

use anyhow::Result;
use dotbind_config::EnvTable;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::args::OutputFormat;

#[derive(Serialize)]
#[serde(untagged)]
enum Listing<'a> {
    Keys(Vec<&'a str>),
    Entries(BTreeMap<&'a str, &'a [String]>),
}

/// Render the table in the requested format.
pub fn render(table: &EnvTable, format: OutputFormat, keys_only: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let listing = if keys_only {
                Listing::Keys(table.keys().collect())
            } else {
                Listing::Entries(table.iter().collect())
            };
            Ok(serde_json::to_string_pretty(&listing)?)
        }
        OutputFormat::Table => {
            if keys_only {
                return Ok(table.keys().map(|key| format!("{key}\n")).collect());
            }
            let width = table.keys().map(str::len).max().unwrap_or(0);
            Ok(table
                .iter()
                .map(|(key, values)| format!("{key:<width$} = {}\n", values.join(", ")))
                .collect())
        }
    }
}

pub fn run(table: &EnvTable, format: OutputFormat, keys_only: bool) -> Result<()> {
    let output = render(table, format, keys_only)?;
    if format == OutputFormat::Json {
        println!("{output}");
    } else {
        print!("{output}");
    }
    Ok(())
}
