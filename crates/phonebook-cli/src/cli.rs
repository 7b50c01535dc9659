//! CLI argument parsing with clap.
//!
//! All flags are optional; with none the shell runs against `contacts.csv` in
//! the working directory.

use clap::Parser;
use phonebook_core::Config;
use std::io;
use std::path::{Path, PathBuf};

/// phonebook - an interactive contact book
#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "An interactive contact book")]
pub struct Cli {
    /// Contacts file loaded at startup and used for default saves
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Configuration file (default: ./phonebook.toml when present)
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log diagnostics to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective config: `--file` > config file > defaults.
    ///
    /// An explicit `--config` that cannot be read or parsed is an error.
    pub fn resolve_config(&self, cwd: &Path) -> io::Result<Config> {
        let base = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(cwd),
        };
        Ok(base.with_default_file(self.file.clone()))
    }
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
