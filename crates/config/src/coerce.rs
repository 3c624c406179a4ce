//! Text-to-scalar conversions shared by the table accessors and the binder.

use std::time::Duration;

/// Parse boolean text.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`. Mixed case such as
/// `tRUE` is rejected.
pub fn parse_bool(text: &str) -> Result<bool, String> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err("expected one of 1, t, true, 0, f, false".to_string()),
    }
}

/// Parse a base-10 integer with an optional sign.
pub fn parse_int(text: &str) -> Result<i64, String> {
    text.parse::<i64>().map_err(|e| e.to_string())
}

/// Parse a human-readable duration such as `1h30m`, `250ms` or `2 days`.
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    humantime::parse_duration(text).map_err(|e| e.to_string())
}
