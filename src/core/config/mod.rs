use std::fmt;
use std::path::{Path, PathBuf};

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::{ConfigPaths, RC_FILE_NAME};

/// Startup configuration: the rc file whose lines run before the first
/// prompt.
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    /// Uses `~/.myshellrc`.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Config {
            paths: ConfigPaths::new()?,
        })
    }

    pub fn with_rc_path(path: impl Into<PathBuf>) -> Self {
        Config {
            paths: ConfigPaths::with_rc_path(path),
        }
    }

    pub fn rc_path(&self) -> &Path {
        &self.paths.rc_path
    }

    pub fn load(&self) -> Result<Vec<String>, ConfigError> {
        ConfigLoader::new(&self.paths).load_lines()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
