//! Quote-aware comment stripping for a single line.
//!
//! Responsibilities:
//! - Remove a trailing `#` or `;` comment from one line of dotenv text.
//! - Copy quoted sections through untouched, including comment characters.
//!
//! Does NOT handle:
//! - Splitting keys from values (see `lines.rs`).
//! - Removing quotes from values (see `value.rs`).
//!
//! Invariants:
//! - A single left-to-right pass with constant auxiliary state.
//! - A carriage return or newline outside a quote ends the scan.
//! - An unterminated quote simply runs to the end of the input.

use crate::constants::{COMMENT_CHARS, ESCAPE_CHAR, QUOTE_CHARS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Plain,
    Quoted { quote: char, escaped: bool },
    Comment,
}

/// Strip a trailing comment from `line`, respecting quoted sections.
pub fn strip_comments(line: &str) -> String {
    let mut kept = String::with_capacity(line.len());
    let mut state = ScanState::Plain;

    for ch in line.chars() {
        match state {
            ScanState::Quoted { quote, escaped } => {
                state = if escaped {
                    ScanState::Quoted {
                        quote,
                        escaped: false,
                    }
                } else if ch == ESCAPE_CHAR {
                    ScanState::Quoted {
                        quote,
                        escaped: true,
                    }
                } else if ch == quote {
                    ScanState::Plain
                } else {
                    state
                };
                kept.push(ch);
            }
            ScanState::Comment => {
                if is_line_end(ch) {
                    break;
                }
            }
            ScanState::Plain => {
                if is_line_end(ch) {
                    break;
                }
                if QUOTE_CHARS.contains(&ch) {
                    state = ScanState::Quoted {
                        quote: ch,
                        escaped: false,
                    };
                    kept.push(ch);
                } else if COMMENT_CHARS.contains(&ch) {
                    state = ScanState::Comment;
                } else {
                    kept.push(ch);
                }
            }
        }
    }

    kept
}

fn is_line_end(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}
