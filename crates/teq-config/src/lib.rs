//! Configuration for teq.
//!
//! teq reads an optional TOML file named `.teq.toml` from the current
//! directory, falling back to `~/.teq.toml`. Its one setting is
//! `corpus_path`, the directory against which bare corpus-file names on
//! the command line are resolved.

#![warn(missing_docs)]

mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
pub use error::ConfigError;
use serde::Deserialize;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".teq.toml";

/// Loaded teq configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory containing corpus files.
    pub corpus_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from `cwd/.teq.toml`, falling back to
    /// `~/.teq.toml`. Missing files mean an empty configuration.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let local = cwd.join(CONFIG_FILENAME);
        if local.is_file() {
            return Self::load_file(&local);
        }
        if let Some(global) = global_config_path()
            && global.is_file()
        {
            return Self::load_file(&global);
        }
        Ok(Self::default())
    }

    /// Loads configuration from a specific file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolves a corpus-file name against the configured corpus path.
    ///
    /// Names that already point at an existing file, and names given
    /// when no corpus path is configured, are used as-is.
    pub fn resolve_corpus_file(&self, name: &str) -> PathBuf {
        let direct = PathBuf::from(name);
        if direct.is_file() {
            return direct;
        }
        match &self.corpus_path {
            Some(dir) => dir.join(name),
            None => direct,
        }
    }
}

/// Returns the path of the global configuration file (`~/.teq.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}
