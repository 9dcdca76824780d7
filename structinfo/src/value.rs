use crate::Kind;

/// Typed mutable access to a single record field
///
/// This is what a decoder gets when it asks a record for one of its fields;
/// it can then assign to the field according to the variant.
#[derive(Debug)]
pub enum ValueMut<'a> {
    Bool(&'a mut bool),
    Int(&'a mut isize),
    Int8(&'a mut i8),
    Int16(&'a mut i16),
    Int32(&'a mut i32),
    Int64(&'a mut i64),
    Uint(&'a mut usize),
    Uint8(&'a mut u8),
    Uint16(&'a mut u16),
    Uint32(&'a mut u32),
    Uint64(&'a mut u64),
    String(&'a mut String),
    /// A field of a kind decoders do not assign to
    Unsupported(Kind),
}

impl ValueMut<'_> {
    pub fn kind(&self) -> Kind {
        use ValueMut as V;
        match self {
            V::Bool(_) => Kind::Bool,
            V::Int(_) => Kind::Int,
            V::Int8(_) => Kind::Int8,
            V::Int16(_) => Kind::Int16,
            V::Int32(_) => Kind::Int32,
            V::Int64(_) => Kind::Int64,
            V::Uint(_) => Kind::Uint,
            V::Uint8(_) => Kind::Uint8,
            V::Uint16(_) => Kind::Uint16,
            V::Uint32(_) => Kind::Uint32,
            V::Uint64(_) => Kind::Uint64,
            V::String(_) => Kind::String,
            V::Unsupported(k) => *k,
        }
    }
}

/// Types usable as fields of a [record](crate::record)
///
/// The primitive types are covered by this crate. Other types can opt in with
/// an empty impl; they are then reported as [Kind::Other] and never written to
/// by decoders.
///
/// # Examples
///
/// ```
/// use syb_structinfo::{Kind, Value};
///
/// #[derive(Default)]
/// struct Geo(f64, f64);
/// impl Value for Geo {}
///
/// assert_eq!(Geo::KIND, Kind::Other);
/// assert_eq!(Geo::default().value_mut().kind(), Kind::Other);
/// ```
pub trait Value {
    /// The kind reported for fields of this type
    const KIND: Kind = Kind::Other;

    /// Access the field for assignment
    fn value_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Unsupported(Self::KIND)
    }
}

macro_rules! primitive_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Value for $ty {
            const KIND: Kind = Kind::$variant;

            fn value_mut(&mut self) -> ValueMut<'_> {
                ValueMut::$variant(self)
            }
        }
    )*};
}

primitive_value! {
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
}

impl Value for f32 {}
impl Value for f64 {}
impl Value for char {}
impl<T> Value for Option<T> {}
impl<T> Value for Vec<T> {}
// Pointers are not followed for fields, only for the record itself
impl<T: ?Sized> Value for Box<T> {}
