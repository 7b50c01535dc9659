//! Optional TOML configuration (`phonebook.toml`).
//!
//! Every field has a default, so an absent file and an empty file behave the
//! same way.

use crate::codec::DEFAULT_FILE;
use crate::display::{DEFAULT_NAME_WIDTH, MAX_NAME_WIDTH};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "phonebook.toml";

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_FILE)
}

fn default_name_width() -> usize {
    DEFAULT_NAME_WIDTH
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: invalid config: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "{}: name_width must be between 1 and {}, got {width}",
        path.display(),
        MAX_NAME_WIDTH
    )]
    InvalidWidth { path: PathBuf, width: usize },
}

impl From<ConfigError> for std::io::Error {
    fn from(e: ConfigError) -> Self {
        let kind = match &e {
            ConfigError::Read { source, .. } => source.kind(),
            ConfigError::Parse { .. } | ConfigError::InvalidWidth { .. } => {
                std::io::ErrorKind::InvalidData
            }
        };
        std::io::Error::new(kind, e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Contacts file loaded at startup and used for default saves
    #[serde(default = "default_file")]
    pub default_file: PathBuf,
    /// Width of the name column in listings
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_file: default_file(),
            name_width: default_name_width(),
        }
    }
}

impl Config {
    /// Parse config from a TOML string.
    ///
    /// `name_width` must lie in `1..=MAX_NAME_WIDTH`.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if !(1..=MAX_NAME_WIDTH).contains(&config.name_width) {
            return Err(ConfigError::InvalidWidth {
                path: path.to_path_buf(),
                width: config.name_width,
            });
        }
        Ok(config)
    }

    /// Load an explicitly requested config file. Missing or invalid is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load `phonebook.toml` from `dir` if present, falling back to defaults.
    ///
    /// A file that exists but does not parse is reported and ignored.
    pub fn load_or_default(dir: &Path) -> Self {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using defaults");
            Self::default()
        })
    }

    /// Override the contacts file (e.g. from a command-line flag).
    pub fn with_default_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.default_file = file;
        }
        self
    }
}
