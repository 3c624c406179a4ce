//! Declarative registration of bindable record fields.

/// Implement [`Bindable`](crate::Bindable) for a struct by listing its fields.
///
/// Each entry is a field name, an optional binding tag after `=>`, and an
/// optional `as record` / `as pointer` marker for fields that must be
/// skipped. The record's type name is the struct identifier.
///
/// # Usage
/// ```
/// use dotbind_config::{EnvTable, bindable};
///
/// #[derive(Default)]
/// struct Inner {
///     name: String,
/// }
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
///     aliases: Vec<String>,
///     inner: Option<Box<Inner>>,
/// }
///
/// bindable! {
///     Server {
///         host => "Host",
///         port => "Port",
///         aliases => "Aliases",
///         inner => "Inner" as pointer,
///     }
/// }
///
/// let table = EnvTable::parse("SERVER.Host = example.org\nSERVER.Port = 443\nSERVER.Aliases = a, b");
/// let server: Server = table.bind_new().unwrap();
/// assert_eq!(server.host, "example.org");
/// assert_eq!(server.port, 443);
/// assert_eq!(server.aliases, ["a", "b"]);
/// assert!(server.inner.is_none());
/// # let _ = Inner::default().name;
/// ```
#[macro_export]
macro_rules! bindable {
    (@tag) => {
        ::std::option::Option::None
    };
    (@tag $tag:literal) => {
        ::std::option::Option::Some($tag)
    };
    (@slot $this:ident, $field:ident, ($($tag:literal)?), ) => {
        $crate::FieldSlot::new(
            ::std::stringify!($field),
            $crate::bindable!(@tag $($tag)?),
            &mut $this.$field,
        )
    };
    (@slot $this:ident, $field:ident, ($($tag:literal)?), record) => {
        $crate::FieldSlot::record(::std::stringify!($field), $crate::bindable!(@tag $($tag)?))
    };
    (@slot $this:ident, $field:ident, ($($tag:literal)?), pointer) => {
        $crate::FieldSlot::pointer(::std::stringify!($field), $crate::bindable!(@tag $($tag)?))
    };
    (
        $record:ident {
            $(
                $field:ident $(=> $tag:literal)? $(as $shape:ident)?
            ),*$(,)?
        }
    ) => {
        impl $crate::Bindable for $record {
            fn type_name(&self) -> &'static str {
                ::std::stringify!($record)
            }

            fn fields(&mut self) -> ::std::vec::Vec<$crate::FieldSlot<'_>> {
                ::std::vec![
                    $( $crate::bindable!(@slot self, $field, ($($tag)?), $($shape)?) ),*
                ]
            }
        }
    };
}
