//! Dotenv text parsing.
//!
//! Responsibilities:
//! - Strip quote-aware comments from raw lines (`comments.rs`).
//! - Normalize individual value tokens (`value.rs`).
//! - Turn lines into key/value entries with substitution (`lines.rs`).
//!
//! Does NOT handle:
//! - Owning the loaded state or the loaded flag (see `table.rs`).
//! - Binding values onto records (see `binder`).

mod comments;
mod lines;
mod value;

pub use comments::strip_comments;
pub use lines::{Assignment, split_assignment};
pub use value::{is_null_sentinel, normalize_token};

pub(crate) use lines::load_into;
