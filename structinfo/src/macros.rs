//! Generic helpers for declaring records with field tags

/// Declare a struct together with its field table
///
/// Every field may carry tags after a `=>`, one value per namespace, much
/// like struct tags in other languages. A field is exported iff it is
/// declared `pub`.
///
/// The macro emits the struct unchanged (minus the tags), an
/// [Introspect](crate::Introspect) impl describing the fields in declaration
/// order and a [Value](crate::Value) impl so the record can itself be used as
/// a (non decodable) field.
///
/// # Examples
///
/// ```
/// use syb_structinfo::{extract_type, record, Kind};
///
/// record! {
///     /// A user as stored in the export files
///     #[derive(Debug, Default, PartialEq)]
///     pub struct User {
///         pub name: String => [tsv = "name", json = "first_name"],
///         pub age: u32 => [tsv = "age"],
///         pub active: bool => [tsv = ",col:3"],
///         pub notes: Vec<String> => [tsv = "-"],
///         secret: String,
///     }
/// }
///
/// let info = extract_type::<User>("json").unwrap();
/// assert_eq!(info.num_fields, 5);
/// assert_eq!(info.fields.exported.len(), 4);
/// assert_eq!(info.fields.all[0].tag, "first_name");
/// assert_eq!(info.fields.all[1].tag, "");
/// assert_eq!(info.fields.all[3].kind, Kind::Other);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $fvis:vis $field:ident : $fty:ty $(=> [$($ns:ident = $tag:literal),* $(,)?])?
            ),* $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name {
            $(
                $(#[$fattr])*
                $fvis $field: $fty,
            )*
        }

        impl $crate::Introspect for $name {
            fn shape() -> $crate::Shape {
                const FIELDS: &[$crate::FieldSpec] = &[
                    $(
                        $crate::FieldSpec {
                            name: ::core::stringify!($field),
                            kind: <$fty as $crate::Value>::KIND,
                            exported: $crate::__private::is_exported(::core::stringify!($fvis)),
                            tags: &[$($((::core::stringify!($ns), $tag)),*)?],
                        },
                    )*
                ];
                $crate::Shape::Record(FIELDS)
            }

            fn field_mut(&mut self, index: usize) -> ::core::option::Option<$crate::ValueMut<'_>> {
                let mut _at = 0usize;
                $(
                    if _at == index {
                        return ::core::option::Option::Some(
                            $crate::Value::value_mut(&mut self.$field),
                        );
                    }
                    _at += 1;
                )*
                ::core::option::Option::None
            }
        }

        impl $crate::Value for $name {
            const KIND: $crate::Kind = $crate::Kind::Struct;
        }
    };
}

/// Whether a stringified visibility marks the field as exported
///
/// Only plain `pub` counts; restricted visibilities are crate internal.
pub const fn is_exported(vis: &str) -> bool {
    matches!(vis.as_bytes(), b"pub")
}
