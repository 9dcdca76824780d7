use thiserror::Error;

use crate::{Kind, ValueMut};

/// Raised when the type used for info extraction is not a record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("type for decoding must be a struct or a reference to one")]
pub struct InvalidType;

/// Static description of one declared field, as emitted by [record](crate::record)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: Kind,
    pub exported: bool,
    /// `(namespace, value)` pairs in declaration order
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldSpec {
    /// The tag value under the given namespace; empty if there is none
    ///
    /// When a namespace is given twice, the first value wins.
    pub fn tag(&self, namespace: &str) -> &'static str {
        self.tags
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, value)| *value)
            .unwrap_or("")
    }
}

/// The shape of a type as seen by [extract]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A record with its fields in declaration order
    Record(&'static [FieldSpec]),
    /// Anything that has no fields
    Scalar(Kind),
}

/// Types whose fields can be enumerated and assigned by position
///
/// Records get this through the [record](crate::record) macro. References and
/// boxes forward to the type behind them, so `&mut &mut Box<T>` looks exactly
/// like `T`.
pub trait Introspect {
    fn shape() -> Shape;

    /// Mutable access to the field at the given declaration index
    ///
    /// Returns `None` for scalars, for out of range indices and when the value
    /// is behind a shared reference.
    fn field_mut(&mut self, _index: usize) -> Option<ValueMut<'_>> {
        None
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn shape() -> Shape {
        T::shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for &mut T {
    fn shape() -> Shape {
        T::shape()
    }

    fn field_mut(&mut self, index: usize) -> Option<ValueMut<'_>> {
        (**self).field_mut(index)
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }

    fn field_mut(&mut self, index: usize) -> Option<ValueMut<'_>> {
        (**self).field_mut(index)
    }
}

macro_rules! scalar_shape {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Introspect for $ty {
            fn shape() -> Shape {
                Shape::Scalar(Kind::$kind)
            }
        }
    )*};
}

scalar_shape! {
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    String => String,
    str => String,
    f32 => Other,
    f64 => Other,
    char => Other,
}

/// Information about one field of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub index: usize,
    pub name: &'static str,
    pub kind: Kind,
    pub exported: bool,
    pub tag: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub exported: Vec<FieldInfo>,
    pub all: Vec<FieldInfo>,
}

/// Information about a record and its fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    pub num_fields: usize,
    pub fields: Fields,
}

/// Extract information about the record behind `value`
///
/// References are followed until the record itself is reached. Tags are read
/// from the given namespace.
///
/// # Examples
///
/// ```
/// use syb_structinfo::{extract, record, InvalidType, Kind};
///
/// record! {
///     #[derive(Default)]
///     pub struct Point {
///         pub x: i32 => [tsv = "x"],
///         pub y: i32 => [tsv = ",col:1"],
///         label: String,
///     }
/// }
///
/// let point = Point::default();
/// let info = extract(&&point, "tsv")?;
/// assert_eq!(info.num_fields, 3);
/// assert_eq!(info.fields.exported.len(), 2);
/// assert_eq!(info.fields.all[1].tag, ",col:1");
/// assert_eq!(info.fields.all[2].kind, Kind::String);
/// assert!(!info.fields.all[2].exported);
///
/// assert_eq!(extract(&5u32, "tsv"), Err(InvalidType));
/// # Ok::<(), InvalidType>(())
/// ```
pub fn extract<T: Introspect + ?Sized>(
    _value: &T,
    tag_namespace: &str,
) -> Result<Info, InvalidType> {
    extract_type::<T>(tag_namespace)
}

/// Like [extract] but without needing a value
pub fn extract_type<T: Introspect + ?Sized>(tag_namespace: &str) -> Result<Info, InvalidType> {
    let specs = match T::shape() {
        Shape::Record(specs) => specs,
        Shape::Scalar(_) => return Err(InvalidType),
    };

    let mut info = Info {
        num_fields: specs.len(),
        fields: Fields::default(),
    };
    for (index, spec) in specs.iter().enumerate() {
        let field = FieldInfo {
            index,
            name: spec.name,
            kind: spec.kind,
            exported: spec.exported,
            tag: spec.tag(tag_namespace),
        };
        info.fields.all.push(field);
        if field.exported {
            info.fields.exported.push(field);
        }
    }
    Ok(info)
}
