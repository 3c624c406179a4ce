//! Binding table entries onto typed records.
//!
//! Responsibilities:
//! - Define the [`Bindable`] trait records implement to expose their fields.
//! - Match `TypeName.FieldTag` keys against records and assign coerced values.
//!
//! Does NOT handle:
//! - Recursing into nested records or pointer fields; those are skipped.
//! - Allocating records; callers own every destination.
//!
//! Invariants:
//! - Type name and tag matching ignore ASCII case.
//! - Only the first two key segments are considered; a key with one segment
//!   never binds.
//! - Keys are visited in sorted order, so the last matching key wins.
//! - Binding stops at the first error; fields already written keep their values.

mod field;
mod macros;

pub use field::{FieldSlot, FieldTarget, IntTarget, UintTarget};

use crate::constants::KEY_SEGMENT_SEPARATOR;
use crate::error::BindError;
use crate::table::EnvTable;

/// A record whose fields can receive values from an [`EnvTable`].
///
/// Usually implemented with the [`bindable!`](crate::bindable) macro.
pub trait Bindable {
    /// Name matched against the first segment of a binding key.
    fn type_name(&self) -> &'static str;

    /// Mutable views of every field that takes part in binding.
    fn fields(&mut self) -> Vec<FieldSlot<'_>>;
}

impl EnvTable {
    /// Bind matching keys onto each record in `records`.
    ///
    /// Records are processed independently and may be of different types.
    /// Keys whose first segment matches none of them are ignored.
    pub fn bind(&self, records: &mut [&mut dyn Bindable]) -> Result<(), BindError> {
        if !self.is_loaded() {
            return Err(BindError::NotLoaded);
        }
        for record in records.iter_mut() {
            self.bind_record(&mut **record)?;
        }
        Ok(())
    }

    /// Bind matching keys onto a single record.
    pub fn bind_one<T: Bindable>(&self, record: &mut T) -> Result<(), BindError> {
        self.bind(&mut [record as &mut dyn Bindable])
    }

    /// Build a default record and bind matching keys onto it.
    pub fn bind_new<T: Bindable + Default>(&self) -> Result<T, BindError> {
        let mut record = T::default();
        self.bind_one(&mut record)?;
        Ok(record)
    }

    fn bind_record(&self, record: &mut dyn Bindable) -> Result<(), BindError> {
        let type_name = record.type_name();
        let mut fields = record.fields();
        let mut bound = 0usize;

        for (key, values) in self.iter() {
            let mut segments = key.split(KEY_SEGMENT_SEPARATOR);
            let Some(head) = segments.next() else {
                continue;
            };
            if !head.eq_ignore_ascii_case(type_name) {
                continue;
            }
            let Some(tag) = segments.next() else {
                tracing::trace!(record = type_name, key, "key has no field segment");
                continue;
            };

            for field in fields.iter_mut() {
                if field.is_indirect() || !field.matches_tag(tag) {
                    continue;
                }
                field.assign(type_name, key, values)?;
                bound += 1;
            }
        }

        tracing::debug!(record = type_name, bound, "bound record");
        Ok(())
    }
}
