//! Field descriptors and typed assignment targets for binding.
//!
//! Responsibilities:
//! - Describe one bindable field (name, binding tag, typed target).
//! - Coerce a stored value sequence into the field's declared type.
//!
//! Does NOT handle:
//! - Matching keys against records (see `mod.rs`).
//!
//! Invariants:
//! - The set of assignable kinds is closed: string, bool, signed and unsigned
//!   integers, and string sequences.
//! - Record and pointer targets are never assigned.
//! - Unsigned targets accept negative text by wrapping through `u64`.

use crate::coerce::{parse_bool, parse_int};
use crate::error::BindError;

/// A mutable view of one record field, produced by [`Bindable::fields`](super::Bindable::fields).
pub struct FieldSlot<'a> {
    /// Field name as declared on the record.
    pub name: &'static str,
    /// Binding tag matched against the second key segment. Untagged fields
    /// are never bound.
    pub tag: Option<&'static str>,
    pub target: FieldTarget<'a>,
}

impl<'a> FieldSlot<'a> {
    pub fn new(
        name: &'static str,
        tag: Option<&'static str>,
        target: impl Into<FieldTarget<'a>>,
    ) -> Self {
        Self {
            name,
            tag,
            target: target.into(),
        }
    }

    /// A nested record field. Present for completeness, never bound.
    pub fn record(name: &'static str, tag: Option<&'static str>) -> Self {
        Self::new(name, tag, FieldTarget::Record)
    }

    /// A pointer-like field (`Option<Box<T>>`, `Box<T>`, `Rc<T>`). Never bound.
    pub fn pointer(name: &'static str, tag: Option<&'static str>) -> Self {
        Self::new(name, tag, FieldTarget::Pointer)
    }

    /// Whether this field is a nested record or pointer and must be skipped.
    pub fn is_indirect(&self) -> bool {
        matches!(self.target, FieldTarget::Record | FieldTarget::Pointer)
    }

    /// Whether the tag matches `segment`, ignoring ASCII case.
    pub fn matches_tag(&self, segment: &str) -> bool {
        self.tag.is_some_and(|tag| tag.eq_ignore_ascii_case(segment))
    }

    pub(crate) fn assign(
        &mut self,
        record: &'static str,
        key: &str,
        values: &[String],
    ) -> Result<(), BindError> {
        let first = values.first().map(String::as_str).unwrap_or_default();
        let field = self.name;
        let coercion = |target: &'static str, message: String| BindError::Coercion {
            record,
            field,
            key: key.to_string(),
            target,
            value: first.to_string(),
            message,
        };

        match &mut self.target {
            FieldTarget::Str(slot) => **slot = first.to_string(),
            FieldTarget::Bool(slot) => {
                **slot = parse_bool(first).map_err(|message| coercion("bool", message))?;
            }
            FieldTarget::Int(slot) => {
                let parsed =
                    parse_int(first).map_err(|message| coercion(slot.type_name(), message))?;
                slot.store(parsed)
                    .map_err(|message| coercion(slot.type_name(), message))?;
            }
            FieldTarget::Uint(slot) => {
                let parsed =
                    parse_int(first).map_err(|message| coercion(slot.type_name(), message))?;
                if parsed < 0 {
                    tracing::warn!(record, field, key, "negative value wrapped into unsigned field");
                }
                slot.store(parsed as u64)
                    .map_err(|message| coercion(slot.type_name(), message))?;
            }
            FieldTarget::StringList(slot) => **slot = values.to_vec(),
            FieldTarget::Record | FieldTarget::Pointer => {}
            FieldTarget::Unsupported(kind) => {
                return Err(BindError::UnsupportedField {
                    record,
                    field,
                    kind: *kind,
                });
            }
        }

        tracing::debug!(record, field, key, "bound field");
        Ok(())
    }
}

/// The declared type of a field, borrowing the field for assignment.
pub enum FieldTarget<'a> {
    Str(&'a mut String),
    Bool(&'a mut bool),
    Int(IntTarget<'a>),
    Uint(UintTarget<'a>),
    StringList(&'a mut Vec<String>),
    Record,
    Pointer,
    /// Any other field type, named for error reporting.
    Unsupported(&'static str),
}

/// Signed integer field of any width.
pub enum IntTarget<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    Isize(&'a mut isize),
}

/// Unsigned integer field of any width.
pub enum UintTarget<'a> {
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    U64(&'a mut u64),
    Usize(&'a mut usize),
}

fn narrow<S, T>(value: S) -> Result<T, String>
where
    T: TryFrom<S>,
    T::Error: std::fmt::Display,
{
    T::try_from(value).map_err(|e| e.to_string())
}

impl IntTarget<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::Isize(_) => "isize",
        }
    }

    fn store(&mut self, value: i64) -> Result<(), String> {
        match self {
            Self::I8(slot) => **slot = narrow(value)?,
            Self::I16(slot) => **slot = narrow(value)?,
            Self::I32(slot) => **slot = narrow(value)?,
            Self::I64(slot) => **slot = value,
            Self::Isize(slot) => **slot = narrow(value)?,
        }
        Ok(())
    }
}

impl UintTarget<'_> {
    fn type_name(&self) -> &'static str {
        match self {
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::Usize(_) => "usize",
        }
    }

    fn store(&mut self, value: u64) -> Result<(), String> {
        match self {
            Self::U8(slot) => **slot = narrow(value)?,
            Self::U16(slot) => **slot = narrow(value)?,
            Self::U32(slot) => **slot = narrow(value)?,
            Self::U64(slot) => **slot = value,
            Self::Usize(slot) => **slot = narrow(value)?,
        }
        Ok(())
    }
}

macro_rules! impl_target_from {
    ($($ty:ty => $build:expr),* $(,)?) => {
        $(
            impl<'a> From<&'a mut $ty> for FieldTarget<'a> {
                fn from(slot: &'a mut $ty) -> Self {
                    $build(slot)
                }
            }
        )*
    };
}

impl_target_from! {
    String => FieldTarget::Str,
    bool => FieldTarget::Bool,
    Vec<String> => FieldTarget::StringList,
    i8 => |slot| FieldTarget::Int(IntTarget::I8(slot)),
    i16 => |slot| FieldTarget::Int(IntTarget::I16(slot)),
    i32 => |slot| FieldTarget::Int(IntTarget::I32(slot)),
    i64 => |slot| FieldTarget::Int(IntTarget::I64(slot)),
    isize => |slot| FieldTarget::Int(IntTarget::Isize(slot)),
    u8 => |slot| FieldTarget::Uint(UintTarget::U8(slot)),
    u16 => |slot| FieldTarget::Uint(UintTarget::U16(slot)),
    u32 => |slot| FieldTarget::Uint(UintTarget::U32(slot)),
    u64 => |slot| FieldTarget::Uint(UintTarget::U64(slot)),
    usize => |slot| FieldTarget::Uint(UintTarget::Usize(slot)),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_string_takes_first_value() {
        let mut host = String::new();
        FieldSlot::new("host", Some("Host"), &mut host)
            .assign("Config", "Config.Host", &values(&["a", "b"]))
            .unwrap();
        assert_eq!(host, "a");
    }

    #[test]
    fn test_string_list_takes_all_values() {
        let mut names = vec!["stale".to_string()];
        FieldSlot::new("names", Some("NAMES"), &mut names)
            .assign("Config", "Config.NAMES", &values(&["John", "Doe"]))
            .unwrap();
        assert_eq!(names, ["John", "Doe"]);
    }

    #[test]
    fn test_bool_coercion() {
        let mut flag = false;
        FieldSlot::new("flag", Some("FLAG"), &mut flag)
            .assign("Config", "Config.FLAG", &values(&["True"]))
            .unwrap();
        assert!(flag);

        let err = FieldSlot::new("flag", Some("FLAG"), &mut flag)
            .assign("Config", "Config.FLAG", &values(&["yes"]))
            .unwrap_err();
        assert!(matches!(err, BindError::Coercion { target: "bool", .. }));
    }

    #[test]
    fn test_signed_widths() {
        let mut small: i8 = 0;
        let mut wide: i64 = 0;
        FieldSlot::new("small", Some("S"), &mut small)
            .assign("C", "C.S", &values(&["-128"]))
            .unwrap();
        FieldSlot::new("wide", Some("W"), &mut wide)
            .assign("C", "C.W", &values(&["9000000000"]))
            .unwrap();
        assert_eq!(small, -128);
        assert_eq!(wide, 9_000_000_000);
    }

    #[test]
    fn test_signed_overflow_is_coercion_error() {
        let mut small: i8 = 0;
        let err = FieldSlot::new("small", Some("S"), &mut small)
            .assign("C", "C.S", &values(&["300"]))
            .unwrap_err();
        assert!(matches!(err, BindError::Coercion { target: "i8", .. }));
        assert_eq!(small, 0);
    }

    #[test]
    fn test_unsigned_negative_wraps() {
        let mut count: u64 = 0;
        FieldSlot::new("count", Some("N"), &mut count)
            .assign("C", "C.N", &values(&["-1"]))
            .unwrap();
        assert_eq!(count, u64::MAX);
    }

    #[test]
    fn test_narrow_unsigned_rejects_wrapped_negative() {
        let mut byte: u8 = 0;
        let err = FieldSlot::new("byte", Some("B"), &mut byte)
            .assign("C", "C.B", &values(&["-1"]))
            .unwrap_err();
        assert!(matches!(err, BindError::Coercion { target: "u8", .. }));
    }

    #[test]
    fn test_unsupported_kind() {
        let err = FieldSlot::new("ratio", Some("R"), FieldTarget::Unsupported("f64"))
            .assign("C", "C.R", &values(&["0.5"]))
            .unwrap_err();
        assert!(matches!(
            err,
            BindError::UnsupportedField { record: "C", field: "ratio", kind: "f64" }
        ));
    }

    #[test]
    fn test_tag_matching() {
        let slot = FieldSlot::record("inner", Some("INNER"));
        assert!(slot.is_indirect());
        assert!(slot.matches_tag("inner"));
        assert!(!FieldSlot::pointer("p", None).matches_tag(""));
    }
}
