//! Line loading: turns raw dotenv lines into table entries.
//!
//! Responsibilities:
//! - Strip comments and whitespace from each line and skip blank ones.
//! - Split a line into a key and its comma-separated value tokens.
//! - Resolve `$KEY` back-references against keys loaded on earlier lines.
//! - Omit keys whose only value normalizes to the empty string.
//!
//! Does NOT handle:
//! - Clearing the table before a load (see `EnvTable::load_lines`).
//! - Reading files (see `table.rs`).
//!
//! Invariants:
//! - Values are comma-delimited regardless of quoting.
//! - A back-reference only sees keys stored by previous lines.
//! - A line without `=` has an empty value and is therefore omitted.

use std::collections::BTreeMap;

use crate::constants::{ASSIGNMENT_CHAR, VALUE_SEPARATOR};

use super::comments::strip_comments;
use super::value::{normalize_token, substitution_key};

/// One parsed assignment, before substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub key: &'a str,
    pub raw_value: &'a str,
}

/// Split a stripped and trimmed line on its first `=`.
pub fn split_assignment(line: &str) -> Assignment<'_> {
    match line.split_once(ASSIGNMENT_CHAR) {
        Some((key, raw_value)) => Assignment {
            key: key.trim(),
            raw_value,
        },
        None => Assignment {
            key: line.trim(),
            raw_value: "",
        },
    }
}

/// Append the assignments found in `lines` to `vars`.
///
/// Returns the number of lines that produced a stored key.
pub fn load_into<I, S>(vars: &mut BTreeMap<String, Vec<String>>, lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stored = 0;

    for (index, raw_line) in lines.into_iter().enumerate() {
        let stripped = strip_comments(raw_line.as_ref());
        let line = stripped.trim();
        if line.is_empty() {
            continue;
        }

        let assignment = split_assignment(line);
        let values: Vec<String> = assignment
            .raw_value
            .split(VALUE_SEPARATOR)
            .map(|token| resolve_token(vars, normalize_token(token)))
            .collect();

        if values.len() == 1 && values[0].is_empty() {
            tracing::trace!(
                line = index + 1,
                key = assignment.key,
                "omitting key with empty value"
            );
            continue;
        }

        vars.entry(assignment.key.to_string())
            .or_default()
            .extend(values);
        stored += 1;
    }

    stored
}

fn resolve_token(vars: &BTreeMap<String, Vec<String>>, token: String) -> String {
    let Some(reference) = substitution_key(&token) else {
        return token;
    };
    match vars.get(reference).and_then(|values| values.first()) {
        Some(value) => value.clone(),
        None => {
            tracing::debug!(reference, "unresolved substitution, using empty value");
            String::new()
        }
    }
}
