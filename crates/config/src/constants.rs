//! Centralized constants for the dotenv parser and binder.
//!
//! This module contains the characters and tokens that drive parsing so the
//! stripper, loader and binder agree on a single definition.

// =============================================================================
// File Locations
// =============================================================================

/// Path loaded implicitly by the default table on first access.
pub const DEFAULT_ENV_PATH: &str = ".env";

// =============================================================================
// Line Syntax
// =============================================================================

/// Characters that start a line comment outside of quotes.
pub const COMMENT_CHARS: [char; 2] = ['#', ';'];

/// Characters that open and close a quoted section.
pub const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Escape character recognized inside quoted sections.
pub const ESCAPE_CHAR: char = '\\';

/// Separates a key from its raw value (first occurrence only).
pub const ASSIGNMENT_CHAR: char = '=';

/// Separates individual values of a multi-value key.
pub const VALUE_SEPARATOR: char = ',';

// =============================================================================
// Value Semantics
// =============================================================================

/// Case-insensitive tokens normalized to the empty string.
pub const NULL_SENTINELS: [&str; 3] = ["null", "nil", "none"];

/// Prefix marking a back-reference to an already loaded key.
pub const SUBSTITUTION_PREFIX: char = '$';

// =============================================================================
// Struct Binding
// =============================================================================

/// Separates the record type name from the field tag in binding keys.
pub const KEY_SEGMENT_SEPARATOR: char = '.';
