use std::io::BufRead;
use std::marker::PhantomData;

use syb_structinfo::{extract_type, Introspect};

use crate::coerce::assign;
use crate::dsv::{Row, Rows};
use crate::error::Error;
use crate::tag::{Tag, TAG_NAMESPACE};
use crate::{ReaderConfig, ReaderConfigBuilder, ReaderConfigBuilderError};

/// Reads delimited rows and decodes them into records
///
/// The reader remembers the header (once [read_header](Self::read_header)
/// was called), the current row and the last error. The first row read fixes
/// the number of columns; rows of a different width are rejected.
///
/// Once reading failed, [decode](Self::decode) keeps returning that error.
/// This includes reaching the end of the stream.
///
/// # Examples
///
/// ```
/// use syb_structinfo::record;
/// use syb_tsv::Reader;
///
/// record! {
///     #[derive(Debug, Default, PartialEq)]
///     pub struct User {
///         pub name: String => [tsv = "name"],
///         pub age: u32 => [tsv = "age"],
///         pub active: bool => [tsv = ",col:2"],
///     }
/// }
///
/// let data = "name\tage\tactive\njohn doe\t35\t1\n";
/// let mut reader = Reader::new(data.as_bytes());
/// reader.read_header()?;
///
/// let mut user = User::default();
/// assert!(reader.advance());
/// reader.decode(&mut user)?;
/// assert_eq!(user, User { name: "john doe".into(), age: 35, active: true });
///
/// assert!(!reader.advance());
/// assert!(reader.error().is_some_and(|e| e.is_eof()));
/// # Ok::<(), syb_tsv::Error>(())
/// ```
pub struct Reader<R> {
    rows: Rows<R>,
    num_cols: Option<usize>,
    row: Row,
    header: Row,
    err: Option<Error>,
}

impl<R: BufRead> Reader<R> {
    /// Reader for tab separated values
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Reader using a different column separator
    pub fn with_separator(inner: R, separator: char) -> Result<Self, ReaderConfigBuilderError> {
        let config = ReaderConfigBuilder::default().separator(separator).build()?;
        Ok(Self::with_config(inner, config))
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        Self {
            rows: Rows::new(inner, config),
            num_cols: None,
            row: Row::new(),
            header: Row::new(),
            err: None,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        self.rows.config()
    }

    /// Read one row and make it the current row
    ///
    /// On failure the error is remembered for [decode](Self::decode) and the
    /// previous row stays current; in particular a row with the wrong number
    /// of columns never becomes current.
    pub fn read_row(&mut self) -> Result<&[String], Error> {
        match self.read() {
            Ok(()) => Ok(&self.row),
            Err(err) => {
                self.err = Some(err.clone());
                Err(err)
            }
        }
    }

    fn read(&mut self) -> Result<(), Error> {
        let row = self.rows.read_row()?.ok_or(Error::Eof)?;
        if let Some(expected) = self.num_cols {
            if row.len() != expected {
                return Err(Error::ColumnCountMismatch {
                    expected,
                    found: row.len(),
                });
            }
        }

        self.num_cols = Some(row.len());
        self.row = row;
        Ok(())
    }

    /// Read one row and use it as header from now on
    pub fn read_header(&mut self) -> Result<&[String], Error> {
        let header = self.read_row()?.to_vec();
        self.header = header;
        Ok(&self.header)
    }

    /// Move to the next row
    ///
    /// Returns false if that failed; the reason is available from
    /// [error](Self::error) and from subsequent [decode](Self::decode) calls.
    pub fn advance(&mut self) -> bool {
        self.read_row().is_ok()
    }

    /// Decode the current row into `dest`
    ///
    /// Exported fields are filled from the column their `tsv` tag points to.
    /// Fields tagged `-`, fields whose column can not be resolved and fields
    /// of unsupported kinds are left untouched. The first cell that can not
    /// be parsed aborts decoding; fields assigned before stay assigned.
    pub fn decode<T: Introspect + ?Sized>(&self, dest: &mut T) -> Result<(), Error> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        if self.row.is_empty() {
            return Err(Error::EmptyRow);
        }

        let info = extract_type::<T>(TAG_NAMESPACE)?;
        for field in &info.fields.exported {
            let tag = Tag::parse(field.tag);
            if tag == Tag::Skip {
                continue;
            }
            let Some(cell) = tag.resolve(&self.header).and_then(|col| self.row.get(col)) else {
                continue;
            };
            if let Some(value) = dest.field_mut(field.index) {
                assign(value, cell)?;
            }
        }

        Ok(())
    }

    /// Iterate over the remaining rows, decoding each into a fresh `T`
    ///
    /// Ends at the end of the stream. A read error is yielded once and ends
    /// the iteration; decoding errors are yielded and iteration continues.
    pub fn records<T: Introspect + Default>(&mut self) -> Records<'_, R, T> {
        Records {
            reader: self,
            done: false,
            _record: PhantomData,
        }
    }

    /// Header read by [read_header](Self::read_header); empty before
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The current row; empty before the first successful read
    pub fn row(&self) -> &[String] {
        &self.row
    }

    /// The last read error
    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Number of columns fixed by the first row
    pub fn num_cols(&self) -> Option<usize> {
        self.num_cols
    }

    /// Number of physical lines consumed so far
    pub fn line(&self) -> usize {
        self.rows.line()
    }
}

/// Iterator returned by [Reader::records]
pub struct Records<'a, R, T> {
    reader: &'a mut Reader<R>,
    done: bool,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: Introspect + Default> Iterator for Records<'_, R, T> {
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // A reader that already failed never produces records
        if let Some(err) = self.reader.error() {
            self.done = true;
            return (!err.is_eof()).then(|| Err(err.clone()));
        }

        match self.reader.read_row() {
            Ok(_) => {}
            Err(Error::Eof) => {
                self.done = true;
                return None;
            }
            Err(err) => {
                self.done = true;
                return Some(Err(err));
            }
        }

        let mut record = T::default();
        Some(self.reader.decode(&mut record).map(|()| record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syb_structinfo::record;

    record! {
        #[derive(Debug, Default, PartialEq)]
        struct Pair {
            pub left: String => [tsv = ",col:0"],
            pub right: i32 => [tsv = ",col:1"],
        }
    }

    #[test]
    fn decode_before_reading_is_an_empty_row() {
        let reader = Reader::new("a\t1\n".as_bytes());
        let mut pair = Pair::default();
        assert!(matches!(reader.decode(&mut pair), Err(Error::EmptyRow)));
    }

    #[test]
    fn header_only_stream() {
        let mut reader = Reader::new("left\tright\n".as_bytes());
        assert_eq!(reader.read_header().unwrap(), ["left", "right"]);
        assert_eq!(reader.num_cols(), Some(2));
        assert!(!reader.advance());
        let mut pair = Pair::default();
        assert!(matches!(reader.decode(&mut pair), Err(Error::Eof)));
    }

    #[test]
    fn records_iterates_until_eof() {
        let mut reader = Reader::new("a\t1\nb\tx\nc\t3\n".as_bytes());
        let results: Vec<_> = reader.records::<Pair>().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results[0].as_ref().unwrap(),
            &Pair {
                left: "a".into(),
                right: 1
            }
        );
        assert!(matches!(results[1], Err(Error::ParseInt { .. })));
        assert_eq!(results[2].as_ref().unwrap().left, "c");
        assert_eq!(reader.line(), 3);
    }

    #[test]
    fn records_stops_at_read_errors() {
        let mut reader = Reader::new("a\t1\nb\n".as_bytes());
        let mut records = reader.records::<Pair>();
        assert!(records.next().unwrap().is_ok());
        assert!(matches!(
            records.next(),
            Some(Err(Error::ColumnCountMismatch { expected: 2, found: 1 }))
        ));
        assert!(records.next().is_none());
    }

    #[test]
    fn records_on_a_broken_reader() {
        let mut reader = Reader::new("a\t1\nb\n".as_bytes());
        assert!(reader.advance());
        assert!(!reader.advance());
        let results: Vec<_> = reader.records::<Pair>().collect();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());

        let mut exhausted = Reader::new("".as_bytes());
        assert!(!exhausted.advance());
        assert_eq!(exhausted.records::<Pair>().count(), 0);
    }

    #[test]
    fn custom_separator() {
        let mut reader = Reader::with_separator("x,7\n".as_bytes(), ',').unwrap();
        assert_eq!(reader.config().separator, ',');
        assert!(reader.advance());
        let mut pair = Pair::default();
        reader.decode(&mut pair).unwrap();
        assert_eq!(pair.right, 7);

        assert!(Reader::with_separator("".as_bytes(), '\n').is_err());
    }
}
