//! Tokenizer for delimiter separated values
//!
//! Rows end with `\n` or `\r\n`; the last row may lack a terminator. Empty
//! lines and comment lines are skipped. A field starting with the quote
//! character extends up to the matching closing quote and may contain
//! separators and line breaks; a doubled quote inside it stands for one quote.

use std::io::BufRead;

use crate::error::{Error, SyntaxError, SyntaxErrorKind};
use crate::ReaderConfig;

/// One row with columns
pub type Row = Vec<String>;

/// A physical line without its terminator
struct Line {
    text: String,
    /// Whether the line ended with a line break (as opposed to end of stream)
    terminated: bool,
}

pub struct Rows<R> {
    reader: R,
    config: ReaderConfig,
    line: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> Rows<R> {
    pub fn new(reader: R, config: ReaderConfig) -> Self {
        Self {
            reader,
            config,
            line: 0,
            buf: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of physical lines consumed so far
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Result<Option<Line>, Error> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;

        let terminated = self.buf.last() == Some(&b'\n');
        if terminated {
            self.buf.pop();
        }
        // `\r\n` and a lone `\r` right before the end of stream both end the line
        if self.buf.last() == Some(&b'\r') {
            self.buf.pop();
        }
        let text = std::str::from_utf8(&self.buf)
            .map_err(|e| {
                SyntaxError::new(self.line, e.valid_up_to() + 1, SyntaxErrorKind::InvalidUtf8)
            })?
            .to_owned();
        Ok(Some(Line { text, terminated }))
    }

    /// Next line holding a row, skipping empty and comment lines
    fn next_row_line(&mut self) -> Result<Option<Line>, Error> {
        while let Some(line) = self.next_line()? {
            let is_comment = self
                .config
                .comment
                .is_some_and(|c| line.text.starts_with(c));
            if !line.text.is_empty() && !is_comment {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Read the next row; `None` at the end of the stream
    pub fn read_row(&mut self) -> Result<Option<Row>, Error> {
        let Some(mut line) = self.next_row_line()? else {
            return Ok(None);
        };

        let ReaderConfig {
            separator,
            quote,
            lazy_quotes,
            trim_leading_space,
            ..
        } = self.config;
        let syntax = |line: usize, pos: usize, kind| SyntaxError::new(line, pos + 1, kind);

        let mut row = Row::new();
        let mut pos = 0;
        'fields: loop {
            if trim_leading_space {
                let rest = &line.text[pos..];
                let trimmed =
                    rest.trim_start_matches(|c: char| c.is_whitespace() && c != separator);
                pos += rest.len() - trimmed.len();
            }

            match quote {
                Some(q) if line.text[pos..].starts_with(q) => {
                    // Quoted field
                    pos += q.len_utf8();
                    let mut field = String::new();
                    loop {
                        let rest = &line.text[pos..];
                        let Some(end) = rest.find(q) else {
                            field.push_str(rest);
                            if line.terminated {
                                field.push('\n');
                            }
                            match self.next_line()? {
                                Some(next) => {
                                    line = next;
                                    pos = 0;
                                    continue;
                                }
                                None if lazy_quotes => {
                                    row.push(field);
                                    break 'fields;
                                }
                                None => {
                                    let len = line.text.len();
                                    let kind = SyntaxErrorKind::UnterminatedQuote;
                                    return Err(syntax(self.line, len, kind).into());
                                }
                            }
                        };

                        field.push_str(&rest[..end]);
                        pos += end + q.len_utf8();
                        match line.text[pos..].chars().next() {
                            // Escaped quote
                            Some(c) if c == q => {
                                field.push(q);
                                pos += q.len_utf8();
                            }
                            Some(c) if c == separator => {
                                pos += separator.len_utf8();
                                row.push(field);
                                continue 'fields;
                            }
                            None => {
                                row.push(field);
                                break 'fields;
                            }
                            Some(_) if lazy_quotes => field.push(q),
                            Some(_) => {
                                let kind = SyntaxErrorKind::ExtraneousQuote;
                                return Err(syntax(self.line, pos, kind).into());
                            }
                        }
                    }
                }
                _ => {
                    // Unquoted field
                    let rest = &line.text[pos..];
                    let end = rest.find(separator);
                    let field = &rest[..end.unwrap_or(rest.len())];
                    if let Some(q) = quote.filter(|_| !lazy_quotes) {
                        if let Some(at) = field.find(q) {
                            let kind = SyntaxErrorKind::BareQuote;
                            return Err(syntax(self.line, pos + at, kind).into());
                        }
                    }
                    row.push(field.to_owned());
                    match end {
                        Some(end) => pos += end + separator.len_utf8(),
                        None => break 'fields,
                    }
                }
            }
        }

        Ok(Some(row))
    }
}

impl<R: BufRead> Iterator for Rows<R> {
    type Item = Result<Row, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_row().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReaderConfigBuilder;

    fn rows_with(config: ReaderConfig, input: &str) -> Result<Vec<Row>, Error> {
        Rows::new(input.as_bytes(), config).collect()
    }

    fn rows(input: &str) -> Vec<Row> {
        rows_with(ReaderConfig::default(), input).unwrap()
    }

    fn syntax_kind(config: ReaderConfig, input: &str) -> SyntaxErrorKind {
        match rows_with(config, input) {
            Err(Error::Syntax(e)) => e.kind,
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    fn csv() -> ReaderConfig {
        ReaderConfigBuilder::default().separator(',').build().unwrap()
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(rows("").is_empty());
        assert!(rows("\n\r\n\n").is_empty());
    }

    #[test]
    fn line_endings() {
        assert_eq!(rows("a\tb\nc\td"), [["a", "b"], ["c", "d"]]);
        assert_eq!(rows("a\tb\r\nc\td\r\n"), [["a", "b"], ["c", "d"]]);
    }

    #[test]
    fn carriage_return_before_end_of_stream() {
        assert_eq!(rows("a\tb\r"), [["a", "b"]]);
        assert_eq!(rows("x\t\"y\"\r"), [["x", "y"]]);
        assert_eq!(rows("a\tb\r\nc\td\r"), [["a", "b"], ["c", "d"]]);
        assert!(rows("\r").is_empty());
    }

    #[test]
    fn leading_and_trailing_separators() {
        assert_eq!(rows("\t1\tc2"), [["", "1", "c2"]]);
        assert_eq!(rows("a\t1\tc2\t"), [["a", "1", "c2", ""]]);
        assert_eq!(rows("\t"), [["", ""]]);
    }

    #[test]
    fn quoted_fields() {
        assert_eq!(rows("\"a\tb\"\tc"), [["a\tb", "c"]]);
        assert_eq!(rows("\"\"\t\"\""), [["", ""]]);
        assert_eq!(
            rows_with(csv(), r#""Hello, ""rust"" world",x"#).unwrap(),
            [["Hello, \"rust\" world", "x"]]
        );
    }

    #[test]
    fn quoted_fields_span_lines() {
        assert_eq!(rows("\"Hello\r\nworld\"\tx\nnext\ty"), [["Hello\nworld", "x"], ["next", "y"]]);
    }

    #[test]
    fn quoting_errors() {
        assert_eq!(syntax_kind(csv(), r#""ab"c""#), SyntaxErrorKind::ExtraneousQuote);
        assert_eq!(syntax_kind(csv(), r#""foo"","bar""#), SyntaxErrorKind::ExtraneousQuote);
        assert_eq!(syntax_kind(csv(), "foo,\"bar\r\nbaz,qux"), SyntaxErrorKind::UnterminatedQuote);
        assert_eq!(syntax_kind(csv(), "ab\"c,d"), SyntaxErrorKind::BareQuote);
    }

    #[test]
    fn error_positions() {
        match rows_with(csv(), "a,b\nab\"c,d") {
            Err(Error::Syntax(e)) => assert_eq!((e.line, e.column), (2, 3)),
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn lazy_quotes() {
        let cfg = ReaderConfigBuilder::default().lazy_quotes(true).build().unwrap();
        assert_eq!(rows_with(cfg.clone(), "ab\"c\td").unwrap(), [["ab\"c", "d"]]);
        assert_eq!(rows_with(cfg.clone(), "\"ab\"c\"\td").unwrap(), [["ab\"c", "d"]]);
        assert_eq!(rows_with(cfg, "\"open").unwrap(), [["open"]]);
    }

    #[test]
    fn quoting_disabled() {
        let cfg = ReaderConfigBuilder::default().quote(None).build().unwrap();
        assert_eq!(rows_with(cfg, "\"a\"\tb\"").unwrap(), [["\"a\"", "b\""]]);
    }

    #[test]
    fn comments_and_trimming() {
        let cfg = ReaderConfigBuilder::default()
            .comment(Some('#'))
            .trim_leading_space(true)
            .build()
            .unwrap();
        assert_eq!(
            rows_with(cfg, "# heading\n  a\t \"b\"\n#x\ty\n").unwrap(),
            [["a", "b"]]
        );
    }

    #[test]
    fn invalid_utf8() {
        let input: &[u8] = b"ok\n\xff\xfe\n";
        let result: Result<Vec<Row>, Error> = Rows::new(input, ReaderConfig::default()).collect();
        match result {
            Err(Error::Syntax(e)) => {
                assert_eq!(e.kind, SyntaxErrorKind::InvalidUtf8);
                assert_eq!(e.line, 2);
            }
            other => panic!("expected a syntax error, got {other:?}"),
        }
    }

    #[test]
    fn line_counter_includes_skipped_lines() {
        let mut rows = Rows::new("\n\na\n".as_bytes(), ReaderConfig::default());
        assert_eq!(rows.read_row().unwrap(), Some(vec!["a".to_owned()]));
        assert_eq!(rows.line(), 3);
        assert_eq!(rows.read_row().unwrap(), None);
    }
}
