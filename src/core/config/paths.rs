use super::ConfigError;
use std::path::PathBuf;

pub const RC_FILE_NAME: &str = ".myshellrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the rc file was named on the command line.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE_NAME),
            explicit: false,
        })
    }

    pub fn with_rc_path(rc_path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: rc_path.into(),
            explicit: true,
        }
    }
}
