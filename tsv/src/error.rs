use std::{fmt, io, num::ParseIntError, sync::Arc};

use syb_structinfo::InvalidType;
use thiserror::Error;

/// Errors produced while reading or decoding rows
///
/// Errors are [Clone] so that a [Reader](crate::Reader) can keep returning
/// the error that broke it; I/O errors are shared behind an [Arc] for that.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The underlying stream has no more rows
    #[error("end of stream")]
    Eof,
    /// Decoding was attempted before any row was read
    #[error("empty row")]
    EmptyRow,
    /// A row does not have as many columns as the first row of the stream
    #[error("row has {found} columns but the stream started with {expected}")]
    ColumnCountMismatch { expected: usize, found: usize },
    /// The decoding destination is not a record
    #[error(transparent)]
    InvalidType(#[from] InvalidType),
    /// Error reading from the underlying stream
    #[error("error reading from the underlying stream")]
    Io(#[source] Arc<io::Error>),
    /// The stream is not well formed delimited text
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// A cell could not be parsed into an integer field
    #[error("could not parse {value:?} as an integer")]
    ParseInt {
        value: String,
        #[source]
        source: ParseIntError,
    },
    /// A cell could not be parsed into a boolean field
    #[error(transparent)]
    ParseBool(#[from] ParseBoolError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(Arc::new(err))
    }
}

impl Error {
    /// Whether this is the end of stream marker rather than an actual failure
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Eof)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A quote character inside an unquoted field
    BareQuote,
    /// Something other than a separator or line end after a closing quote
    ExtraneousQuote,
    /// The stream ended inside a quoted field
    UnterminatedQuote,
    /// A line is not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SyntaxErrorKind as K;
        f.write_str(match self {
            K::BareQuote => "bare quote in non-quoted field",
            K::ExtraneousQuote => "extraneous or missing quote in quoted field",
            K::UnterminatedQuote => "quoted field is never closed",
            K::InvalidUtf8 => "line is not valid UTF-8",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("parse error on line {line}, column {column}: {kind}")]
pub struct SyntaxError {
    /// One based line number
    pub line: usize,
    /// One based byte column within the line
    pub column: usize,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(line: usize, column: usize, kind: SyntaxErrorKind) -> Self {
        Self { line, column, kind }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("could not parse {0:?} as a boolean")]
pub struct ParseBoolError(pub String);
