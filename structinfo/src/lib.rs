//! Field introspection for tagged records.
//!
//! Records declared through [record!] carry a static table describing their
//! fields: declaration index, name, primitive [Kind], visibility and tags
//! grouped by namespace. [extract] turns that table into an [Info] for one
//! tag namespace, and [Introspect::field_mut] gives decoders typed write
//! access to a field by index.

mod info;
mod kind;
mod macros;
mod value;

pub use info::{
    extract, extract_type, FieldInfo, FieldSpec, Fields, Info, Introspect, InvalidType, Shape,
};
pub use kind::Kind;
pub use value::{Value, ValueMut};

#[doc(hidden)]
pub mod __private {
    pub use crate::macros::is_exported;
}
