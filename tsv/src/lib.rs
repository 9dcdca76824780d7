//! Decoding of tab (or otherwise) separated values into tagged records.
//!
//! Records are declared with [record!]; each exported field names its column
//! through a `tsv` tag:
//!
//! - `"name"`: the column called `name` in the header
//! - `",col:3"`: the fourth column
//! - `"name,col:3"`: the column called `name`; the ordinal is informational
//! - `"-"`: never decoded
//!
//! ```
//! use syb_tsv::{record, Reader};
//!
//! record! {
//!     #[derive(Debug, Default, PartialEq)]
//!     pub struct User {
//!         pub name: String => [tsv = "name"],
//!         pub age: u32 => [tsv = "age"],
//!         pub range: i64 => [tsv = "range"],
//!         pub active: bool => [tsv = ",col:3"],
//!         pub ignored: String => [tsv = "-"],
//!     }
//! }
//!
//! let data = "name\tage\trange\tactive\njohn doe\t35\t-10\t1";
//! let mut reader = Reader::new(data.as_bytes());
//! reader.read_header()?;
//!
//! let users = reader.records::<User>().collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(users, [User {
//!     name: "john doe".into(),
//!     age: 35,
//!     range: -10,
//!     active: true,
//!     ignored: String::new(),
//! }]);
//! # Ok::<(), syb_tsv::Error>(())
//! ```

mod config;
mod error;
mod reader;
mod tag;

pub mod coerce;
pub mod dsv;

pub use config::{
    ReaderConfig, ReaderConfigBuilder, ReaderConfigBuilderError, DEFAULT_QUOTE, DEFAULT_SEPARATOR,
};
pub use error::{Error, ParseBoolError, SyntaxError, SyntaxErrorKind};
pub use reader::{Reader, Records};
pub use tag::{Tag, TAG_NAMESPACE};

pub use syb_structinfo as structinfo;
pub use syb_structinfo::record;
