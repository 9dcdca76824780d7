use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use syb_tsv::{Error, Reader};

use crate::cli;
use crate::config::ToolConfig;

pub trait Command {
    fn run<W: Write>(self, cfg: &ToolConfig, out: &mut W) -> Result<()>;
}

/// Open a reader on `path`, or on standard input for `-`
fn open(path: &Path, cfg: &ToolConfig) -> Result<Reader<Box<dyn BufRead>>> {
    let input: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("could not open {path:?}"))?;
        Box::new(BufReader::new(file))
    };
    info!("reading {path:?}");
    Ok(Reader::with_config(input, cfg.reader_config()?))
}

impl Command for cli::Header {
    fn run<W: Write>(self, cfg: &ToolConfig, out: &mut W) -> Result<()> {
        let mut reader = open(&self.file, cfg)?;
        let header = match reader.read_header() {
            Ok(header) => header,
            Err(Error::Eof) => bail!("{:?} is empty", self.file),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("could not read header of {:?}", self.file))
            }
        };
        for (i, name) in header.iter().enumerate() {
            writeln!(out, "{i}\t{name}")?;
        }
        Ok(())
    }
}

impl Command for cli::Check {
    fn run<W: Write>(self, cfg: &ToolConfig, out: &mut W) -> Result<()> {
        let mut failed = 0;
        for file in &self.files {
            let mut reader = open(file, cfg)?;
            if cfg.header {
                match reader.read_header() {
                    Ok(header) => debug!("{file:?} header: {header:?}"),
                    Err(Error::Eof) => {
                        writeln!(out, "{}: empty", file.display())?;
                        continue;
                    }
                    Err(e) => {
                        warn!("{file:?} has an unreadable header: {e}");
                        writeln!(out, "{}: line {}: {e}", file.display(), reader.line())?;
                        failed += 1;
                        continue;
                    }
                }
            }

            let mut rows = 0usize;
            loop {
                match reader.read_row() {
                    Ok(_) => rows += 1,
                    Err(Error::Eof) => {
                        let cols = reader.num_cols().unwrap_or(0);
                        writeln!(out, "{}: {rows} rows, {cols} columns", file.display())?;
                        break;
                    }
                    Err(e) => {
                        warn!("{file:?} is malformed: {e}");
                        writeln!(out, "{}: line {}: {e}", file.display(), reader.line())?;
                        failed += 1;
                        break;
                    }
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {} files failed the check", self.files.len());
        }
        Ok(())
    }
}

impl Command for cli::Dump {
    fn run<W: Write>(self, cfg: &ToolConfig, out: &mut W) -> Result<()> {
        let mut reader = open(&self.file, cfg)?;
        if cfg.header {
            match reader.read_header() {
                Ok(_) | Err(Error::Eof) => {}
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("could not read header of {:?}", self.file))
                }
            }
        }

        let mut dumped = 0;
        while self.limit.map_or(true, |limit| dumped < limit) {
            match reader.read_row() {
                Ok(_) => {}
                Err(Error::Eof) => break,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("{:?}, line {}", self.file, reader.line()));
                }
            }

            let header = reader.header();
            let mut delim = "";
            for (i, value) in reader.row().iter().enumerate() {
                match header.get(i) {
                    Some(name) => write!(out, "{delim}{name}={value:?}")?,
                    None => write!(out, "{delim}{i}={value:?}")?,
                }
                delim = " ";
            }
            writeln!(out)?;
            dumped += 1;
        }
        debug!("dumped {dumped} rows of {:?}", self.file);
        Ok(())
    }
}
