//! Process-wide default table with lazy loading.
//!
//! Responsibilities:
//! - Hold one shared [`EnvTable`] behind a mutex.
//! - Load [`DEFAULT_ENV_PATH`] the first time an accessor runs without an explicit load.
//! - Offer accessors that fall back to caller-supplied defaults for absent keys.
//!
//! Does NOT handle:
//! - Parsing or binding logic; every function delegates to [`EnvTable`].
//! - Exporting values into the process environment.
//!
//! Invariants:
//! - The implicit load happens at most once; a missing default file leaves the
//!   table loaded and empty.
//! - Explicit [`load`] and [`load_str`] replace the table like their `EnvTable` counterparts.
//! - Absent keys never error here; unparsable bool/int values still do.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;

use crate::binder::Bindable;
use crate::coerce::{parse_bool, parse_duration, parse_int};
use crate::constants::DEFAULT_ENV_PATH;
use crate::error::{BindError, EnvError};
use crate::table::EnvTable;

fn default_table() -> &'static Mutex<EnvTable> {
    static TABLE: OnceLock<Mutex<EnvTable>> = OnceLock::new();
    TABLE.get_or_init(|| Mutex::new(EnvTable::new()))
}

fn lock() -> MutexGuard<'static, EnvTable> {
    default_table()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn loaded() -> MutexGuard<'static, EnvTable> {
    let mut table = lock();
    if !table.is_loaded()
        && let Err(e) = table.load(DEFAULT_ENV_PATH)
    {
        tracing::debug!(error = %e, "default env file not loaded");
    }
    table
}

/// Replace the default table with the file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<(), EnvError> {
    lock().load(path)
}

/// Replace the default table with in-memory dotenv text.
pub fn load_str(text: &str) {
    lock().load_str(text);
}

/// First value for `key`, or the empty string if absent.
pub fn get(key: &str) -> String {
    get_or(key, "")
}

/// First value for `key`, or `default` if absent.
pub fn get_or(key: &str, default: &str) -> String {
    first(&loaded(), key).unwrap_or(default).to_string()
}

/// All values for `key`, or an empty vector if absent.
pub fn get_all(key: &str) -> Vec<String> {
    get_all_or(key, &[])
}

/// All values for `key`, or `default` if absent.
pub fn get_all_or(key: &str, default: &[&str]) -> Vec<String> {
    let table = loaded();
    if table.contains(key) {
        table.get_all(key).map(<[String]>::to_vec).unwrap_or_default()
    } else {
        default.iter().map(|s| s.to_string()).collect()
    }
}

/// First value for `key` as a boolean, or `default` if absent.
///
/// # Errors
///
/// Returns [`EnvError::Coercion`] if the value is present but not boolean text.
pub fn get_bool_or(key: &str, default: bool) -> Result<bool, EnvError> {
    match first(&loaded(), key) {
        Some(value) => parse_bool(value).map_err(|message| coercion(key, "bool", value, message)),
        None => Ok(default),
    }
}

/// First value for `key` as an integer, or `default` if absent.
///
/// # Errors
///
/// Returns [`EnvError::Coercion`] if the value is present but not an integer.
pub fn get_int_or(key: &str, default: i64) -> Result<i64, EnvError> {
    match first(&loaded(), key) {
        Some(value) => parse_int(value).map_err(|message| coercion(key, "int", value, message)),
        None => Ok(default),
    }
}

/// First value for `key` as a duration, or `default` if absent or unparsable.
pub fn get_duration_or(key: &str, default: Duration) -> Duration {
    let table = loaded();
    let Some(value) = first(&table, key) else {
        return default;
    };
    parse_duration(value).unwrap_or_else(|message| {
        tracing::debug!(key, %message, "invalid duration, using default");
        default
    })
}

/// Bind the default table onto `records`.
pub fn bind(records: &mut [&mut dyn Bindable]) -> Result<(), BindError> {
    loaded().bind(records)
}

fn first<'a>(table: &'a EnvTable, key: &str) -> Option<&'a str> {
    table.get(key).ok()
}

fn coercion(key: &str, target: &'static str, value: &str, message: String) -> EnvError {
    EnvError::Coercion {
        key: key.to_string(),
        target,
        value: value.to_string(),
        message,
    }
}
