//! Normalization of individual value tokens.
//!
//! Responsibilities:
//! - Strip one matching pair of surrounding quotes from a token.
//! - Remove every remaining quote character from the token.
//! - Map the null-like sentinels to the empty string.
//! - Recognize `$KEY` back-references.
//!
//! Does NOT handle:
//! - Resolving back-references against the table (see `lines.rs`).
//! - Splitting raw values on commas (see `lines.rs`).
//!
//! Invariants:
//! - Quote removal is blunt: escapes are not interpreted, `\"` keeps its backslash.
//! - Sentinel matching is ASCII case-insensitive and applied after quote removal.

use crate::constants::{NULL_SENTINELS, QUOTE_CHARS, SUBSTITUTION_PREFIX};

/// Normalize one comma-separated token into its stored form.
///
/// The returned string is the value as it will be stored, before any
/// `$KEY` substitution.
pub fn normalize_token(raw: &str) -> String {
    let token = raw.trim();
    if token.is_empty() {
        return String::new();
    }

    let unwrapped = strip_matching_quotes(token);
    let unquoted: String = unwrapped
        .chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .collect();
    let value = unquoted.trim();

    if is_null_sentinel(value) {
        return String::new();
    }
    value.to_string()
}

/// Return the key named by a `$KEY` token, if the token is a back-reference.
pub fn substitution_key(token: &str) -> Option<&str> {
    token.strip_prefix(SUBSTITUTION_PREFIX)
}

/// Whether `value` is one of the null-like sentinels.
pub fn is_null_sentinel(value: &str) -> bool {
    NULL_SENTINELS
        .iter()
        .any(|sentinel| value.eq_ignore_ascii_case(sentinel))
}

fn strip_matching_quotes(token: &str) -> &str {
    let mut chars = token.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return token;
    };
    if first == last && QUOTE_CHARS.contains(&first) {
        &token[first.len_utf8()..token.len() - last.len_utf8()]
    } else {
        token
    }
}
