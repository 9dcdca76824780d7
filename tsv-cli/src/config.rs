//! Configuration readable from a config file.
//!
//! tsvtool can read its reader settings from a TOML file:
//!
//! ```toml
//! header = true
//!
//! [reader]
//! separator = ","
//! comment = "#"
//! trim_leading_space = true
//! ```
//!
//! Every key is optional; missing keys keep the defaults of [ReaderConfig].

use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use syb_tsv::{ReaderConfig, ReaderConfigBuilder};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// whether the first row of every file is a header
    #[serde(default = "default_header")]
    pub header: bool,

    /// tokenizer settings
    #[serde(default)]
    pub reader: ReaderSection,
}

fn default_header() -> bool {
    true
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            reader: ReaderSection::default(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReaderSection {
    /// column separator, a tab unless given
    pub separator: Option<char>,

    /// quote character, `"` unless given
    pub quote: Option<char>,

    /// set to false to read quote characters literally
    pub quoting: Option<bool>,

    /// lines starting with this character are skipped
    pub comment: Option<char>,

    pub lazy_quotes: Option<bool>,

    pub trim_leading_space: Option<bool>,
}

impl ToolConfig {
    /// load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(p: P) -> anyhow::Result<Self> {
        let p = p.as_ref();
        let text = fs::read_to_string(p)
            .with_context(|| format!("could not read config file {p:?}"))?;
        let config = toml::from_str(&text).with_context(|| format!("invalid config file {p:?}"))?;
        Ok(config)
    }

    /// Write a config to a file
    pub fn store<P: AsRef<Path>>(&self, p: P) -> anyhow::Result<()> {
        fs::write(p, toml::to_string_pretty(&self)?)?;
        Ok(())
    }

    /// Reader settings described by this configuration
    pub fn reader_config(&self) -> anyhow::Result<ReaderConfig> {
        let r = &self.reader;
        let mut builder = ReaderConfigBuilder::default();
        if let Some(separator) = r.separator {
            builder.separator(separator);
        }
        match (r.quoting, r.quote) {
            (Some(false), _) => {
                builder.quote(None);
            }
            (_, Some(quote)) => {
                builder.quote(Some(quote));
            }
            _ => {}
        }
        if let Some(comment) = r.comment {
            builder.comment(Some(comment));
        }
        if let Some(lazy) = r.lazy_quotes {
            builder.lazy_quotes(lazy);
        }
        if let Some(trim) = r.trim_leading_space {
            builder.trim_leading_space(trim);
        }
        builder.build().context("invalid reader configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: ToolConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ToolConfig::default());
        assert!(cfg.header);
        assert_eq!(cfg.reader_config().unwrap(), ReaderConfig::default());
    }

    #[test]
    fn reader_section() {
        let cfg: ToolConfig = toml::from_str(
            r##"
            header = false

            [reader]
            separator = ";"
            comment = "#"
            quoting = false
            "##,
        )
        .unwrap();
        assert!(!cfg.header);
        let reader = cfg.reader_config().unwrap();
        assert_eq!(reader.separator, ';');
        assert_eq!(reader.comment, Some('#'));
        assert_eq!(reader.quote, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ToolConfig>("[reader]\ndelimiter = \",\"\n").is_err());
        assert!(toml::from_str::<ToolConfig>("[reader]\nseparator = \"ab\"\n").is_err());
    }

    #[test]
    fn invalid_combinations_fail_late() {
        let cfg: ToolConfig =
            toml::from_str("[reader]\nseparator = \"#\"\ncomment = \"#\"\n").unwrap();
        assert!(cfg.reader_config().is_err());
    }

    #[test]
    fn store_and_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tsvtool.toml");

        let mut cfg = ToolConfig::default();
        cfg.reader.separator = Some('|');
        cfg.reader.trim_leading_space = Some(true);
        cfg.store(&path)?;

        assert_eq!(ToolConfig::load(&path)?, cfg);
        Ok(())
    }
}
