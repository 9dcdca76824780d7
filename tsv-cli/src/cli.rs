//! Contains the code used to parse command line parameters for tsvtool.
//!
//! [CliArgs::run] is called by the main function and does the bulk of the
//! work, while the main function just sets up logging.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;

use crate::cmd::Command;
use crate::config::ToolConfig;

/// Command line arguments to the tsvtool binary.
///
/// Used for parsing with [clap].
#[derive(Parser, Debug)]
#[command(author, version, about, long_about, arg_required_else_help = true)]
pub struct CliArgs {
    /// Lowest log level to show
    #[arg(long = "log-level", value_name = "LOG_LEVEL", group = "log-level")]
    log_level: Option<log::LevelFilter>,

    /// Show verbose log output; sets log level to "info"
    #[arg(short, long, group = "log-level")]
    verbose: bool,

    /// Show no log output; sets log level to "error"
    #[arg(short, long, group = "log-level")]
    quiet: bool,

    /// Reader configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Column separator; overrides the configuration file
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Treat the first row as data instead of as header
    #[arg(long)]
    pub no_header: bool,

    /// The subcommand to be invoked
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Generate completion file for a shell
    #[clap(long, value_name = "shell")]
    pub print_completions: Option<clap_complete::Shell>,
}

impl CliArgs {
    /// Apply the command line parameters to the tool configuration
    ///
    /// Values given on the command line win over the configuration file.
    pub fn apply_to_config(&self, cfg: &mut ToolConfig) -> anyhow::Result<()> {
        if let Some(separator) = self.separator {
            cfg.reader.separator = Some(separator);
        }
        if self.no_header {
            cfg.header = false;
        }
        // Surface configuration conflicts before any file is opened
        cfg.reader_config()?;
        Ok(())
    }

    /// returns the log level filter set by CLI args
    /// returns `None` if the user did not specify any log level filter via CLI
    ///
    /// The argument group ensures that at most one of the log level arguments is given.
    pub fn get_log_level(&self) -> Option<log::LevelFilter> {
        if self.verbose {
            return Some(log::LevelFilter::Info);
        }
        if self.quiet {
            return Some(log::LevelFilter::Error);
        }
        self.log_level
    }

    /// Load the configuration, apply the command line to it and run the subcommand
    pub fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        let mut cfg = match &self.config {
            Some(path) => {
                debug!("loading configuration from {path:?}");
                ToolConfig::load(path)?
            }
            None => ToolConfig::default(),
        };
        self.apply_to_config(&mut cfg)?;

        match self.command {
            Some(CliCommand::Header(cmd)) => cmd.run(&cfg, out),
            Some(CliCommand::Check(cmd)) => cmd.run(&cfg, out),
            Some(CliCommand::Dump(cmd)) => cmd.run(&cfg, out),
            None => Ok(()), // clap prints help if no command is given
        }
    }
}

/// represents a command specified via CLI
#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Print the header columns together with their ordinals
    ///
    /// The printed ordinals are what a `,col:N` tag refers to.
    Header(Header),

    /// Check that every row has as many columns as the first one
    Check(Check),

    /// Print every row as `column=value` pairs
    ///
    /// Columns are named after the header, or by ordinal with `--no-header`.
    Dump(Dump),
}

#[derive(Args, Debug)]
pub struct Header {
    /// File to read; `-` reads standard input
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct Check {
    /// Files to check; `-` reads standard input
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct Dump {
    /// File to read; `-` reads standard input
    pub file: PathBuf,

    /// Stop after this many rows
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}
