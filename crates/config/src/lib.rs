//! Dotenv-style configuration loading with typed struct binding.
//!
//! This crate loads `KEY = value[, value2]` text into an [`EnvTable`] and
//! binds `TypeName.FieldTag` keys onto records implementing [`Bindable`].
//! The [`global`] module offers a lazily loaded process-wide table.

mod binder;
mod coerce;
pub mod constants;
mod error;
pub mod global;
pub mod parser;
mod table;

pub use binder::{Bindable, FieldSlot, FieldTarget, IntTarget, UintTarget};
pub use coerce::{parse_bool, parse_duration, parse_int};
pub use error::{BindError, EnvError};
pub use table::EnvTable;
