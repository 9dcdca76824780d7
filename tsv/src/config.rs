use derive_builder::Builder;

pub const DEFAULT_SEPARATOR: char = '\t';
pub const DEFAULT_QUOTE: Option<char> = Some('"');

/// Tokenizer settings of a [Reader](crate::Reader)
///
/// # Examples
///
/// ```
/// use syb_tsv::ReaderConfigBuilder;
///
/// let config = ReaderConfigBuilder::default()
///     .separator(',')
///     .comment(Some('#'))
///     .build()?;
/// assert_eq!(config.quote, Some('"'));
///
/// // The separator must be distinguishable from quotes and comments
/// assert!(ReaderConfigBuilder::default().separator('"').build().is_err());
/// # Ok::<(), syb_tsv::ReaderConfigBuilderError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(pattern = "mutable", build_fn(validate = "Self::validate"))]
pub struct ReaderConfig {
    /// Column separator
    #[builder(default = "DEFAULT_SEPARATOR")]
    pub separator: char,
    /// Character starting a quoted field; `None` disables quoting
    #[builder(default = "DEFAULT_QUOTE")]
    pub quote: Option<char>,
    /// Lines starting with this character are skipped
    #[builder(default)]
    pub comment: Option<char>,
    /// Accept quotes in unquoted fields and stray quotes in quoted fields
    #[builder(default)]
    pub lazy_quotes: bool,
    /// Ignore whitespace (other than the separator) at the start of a field
    #[builder(default)]
    pub trim_leading_space: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
            comment: None,
            lazy_quotes: false,
            trim_leading_space: false,
        }
    }
}

impl ReaderConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let separator = self.separator.unwrap_or(DEFAULT_SEPARATOR);
        let quote = self.quote.unwrap_or(DEFAULT_QUOTE);
        let comment = self.comment.flatten();

        let is_line_break = |c: char| c == '\r' || c == '\n';
        if is_line_break(separator) || separator == char::REPLACEMENT_CHARACTER {
            return Err(format!("invalid separator {separator:?}"));
        }
        if quote == Some(separator) {
            return Err(format!("separator {separator:?} is also the quote character"));
        }
        if comment == Some(separator) {
            return Err(format!("separator {separator:?} is also the comment character"));
        }
        if quote.is_some() && quote == comment {
            return Err("quote and comment character must differ".to_owned());
        }
        if quote.is_some_and(is_line_break) || comment.is_some_and(is_line_break) {
            return Err("quote and comment character must not be line breaks".to_owned());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ReaderConfigBuilder::default().build().unwrap();
        assert_eq!(built, ReaderConfig::default());
        assert_eq!(built.separator, '\t');
    }

    #[test]
    fn rejects_conflicting_characters() {
        assert!(ReaderConfigBuilder::default().separator('\n').build().is_err());
        assert!(ReaderConfigBuilder::default().comment(Some('\t')).build().is_err());
        assert!(ReaderConfigBuilder::default().comment(Some('"')).build().is_err());
        assert!(ReaderConfigBuilder::default().quote(Some('\r')).build().is_err());

        // Without quoting the former quote character is a fine separator
        let cfg = ReaderConfigBuilder::default()
            .quote(None)
            .separator('"')
            .build()
            .unwrap();
        assert_eq!(cfg.separator, '"');
    }
}
