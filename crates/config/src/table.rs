//! The variable table: loaded dotenv state and its accessors.
//!
//! Responsibilities:
//! - Own the key → values mapping and the loaded flag.
//! - Load from a file path, an in-memory string, or pre-split lines.
//! - Provide typed accessors returning [`EnvError`] instead of panicking.
//!
//! Does NOT handle:
//! - Line parsing rules (see `parser`).
//! - Binding values onto records (see `binder`).
//! - The process-wide default table (see `global.rs`).
//!
//! Invariants:
//! - Every load clears the table first; loads never merge.
//! - The loaded flag is set even when reading a file fails.
//! - Stored keys always have at least one value.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::coerce::{parse_bool, parse_duration, parse_int};
use crate::error::EnvError;
use crate::parser::load_into;

/// Loaded dotenv key/value state.
///
/// Keys are case-sensitive. Each key maps to one or more values in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvTable {
    vars: BTreeMap<String, Vec<String>>,
    loaded: bool,
}

impl EnvTable {
    /// Create an empty, unloaded table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table loaded from the file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let mut table = Self::new();
        table.load(path)?;
        Ok(table)
    }

    /// Create a table loaded from in-memory dotenv text.
    pub fn parse(text: &str) -> Self {
        let mut table = Self::new();
        table.load_str(text);
        table
    }

    /// Replace the table contents with the file at `path`.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
    /// rejecting the file.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Read`] if the file cannot be read. The table is
    /// left empty but marked loaded, so later accessors see no keys rather
    /// than [`EnvError::NotLoaded`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), EnvError> {
        let path = path.as_ref();
        self.reset();

        tracing::debug!(path = %path.display(), "loading env file");
        let bytes = std::fs::read(path).map_err(|source| EnvError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        let stored = load_into(&mut self.vars, text.split('\n'));
        tracing::debug!(path = %path.display(), stored, keys = self.vars.len(), "loaded env file");
        Ok(())
    }

    /// Replace the table contents with in-memory dotenv text.
    pub fn load_str(&mut self, text: &str) {
        self.load_lines(text.split('\n'));
    }

    /// Replace the table contents with already split lines.
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();
        let stored = load_into(&mut self.vars, lines);
        tracing::debug!(stored, keys = self.vars.len(), "loaded env lines");
    }

    fn reset(&mut self) {
        self.loaded = true;
        self.vars.clear();
    }

    /// Whether any load has happened.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn vars(&self) -> Result<&BTreeMap<String, Vec<String>>, EnvError> {
        if self.loaded {
            Ok(&self.vars)
        } else {
            Err(EnvError::NotLoaded)
        }
    }

    /// All values stored for `key`, or an empty slice if the key is absent.
    pub fn get_all(&self, key: &str) -> Result<&[String], EnvError> {
        Ok(self.vars()?.get(key).map(Vec::as_slice).unwrap_or_default())
    }

    /// The first value stored for `key`.
    pub fn get(&self, key: &str) -> Result<&str, EnvError> {
        self.get_nth(key, 0)
    }

    /// The value at `index` for a multi-value `key`.
    pub fn get_nth(&self, key: &str, index: usize) -> Result<&str, EnvError> {
        let values = self
            .vars()?
            .get(key)
            .ok_or_else(|| EnvError::KeyAbsent {
                key: key.to_string(),
            })?;
        values
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| EnvError::IndexOutOfRange {
                key: key.to_string(),
                index,
                len: values.len(),
            })
    }

    /// The first value for `key`, or `fallback` if the key is absent.
    pub fn get_or<'a>(&'a self, key: &str, fallback: &'a str) -> Result<&'a str, EnvError> {
        Ok(self
            .vars()?
            .get(key)
            .and_then(|values| values.first())
            .map_or(fallback, String::as_str))
    }

    /// The first value for `key` parsed as a boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, EnvError> {
        self.coerce(key, "bool", parse_bool)
    }

    /// The first value for `key` parsed as a base-10 integer.
    pub fn get_int(&self, key: &str) -> Result<i64, EnvError> {
        self.coerce(key, "int", parse_int)
    }

    /// The first value for `key` parsed as a duration (`1h30m`, `250ms`).
    pub fn get_duration(&self, key: &str) -> Result<Duration, EnvError> {
        self.coerce(key, "duration", parse_duration)
    }

    fn coerce<T>(
        &self,
        key: &str,
        target: &'static str,
        parse: fn(&str) -> Result<T, String>,
    ) -> Result<T, EnvError> {
        let value = self.get(key)?;
        parse(value).map_err(|message| EnvError::Coercion {
            key: key.to_string(),
            target,
            value: value.to_string(),
            message,
        })
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(String::as_str)
    }

    /// Stored entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.vars
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
