//! Error types for table access and struct binding.
//!
//! Responsibilities:
//! - Define error variants for loading, lookup and coercion failures.
//! - Define error variants for binding values onto records.
//!
//! Does NOT handle:
//! - Deciding whether a failure is fatal; callers choose.
//!
//! Invariants:
//! - Every variant names the key, record or path involved.
//! - Coercion errors carry the offending text so config mistakes are easy to find.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`EnvTable`](crate::EnvTable) loads and accessors.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("env table accessed before any load")]
    NotLoaded,

    #[error("key not found: {key}")]
    KeyAbsent { key: String },

    #[error("index {index} out of range for {key} ({len} values)")]
    IndexOutOfRange {
        key: String,
        index: usize,
        len: usize,
    },

    #[error("invalid {target} value for {key}: {value:?} ({message})")]
    Coercion {
        key: String,
        target: &'static str,
        value: String,
        message: String,
    },

    /// The file could not be read. The table is still marked loaded and empty.
    #[error("failed to read env file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while binding table values onto records.
#[derive(Error, Debug)]
pub enum BindError {
    #[error("env table bound before any load")]
    NotLoaded,

    #[error("cannot bind {key} onto {record}.{field}: invalid {target} value {value:?} ({message})")]
    Coercion {
        record: &'static str,
        field: &'static str,
        key: String,
        target: &'static str,
        value: String,
        message: String,
    },

    #[error("unsupported field kind {kind} for {record}.{field}")]
    UnsupportedField {
        record: &'static str,
        field: &'static str,
        kind: &'static str,
    },
}
