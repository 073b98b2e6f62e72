use std::{fs, io};

use super::{ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Reads the rc file and returns its command lines, each terminated by
    /// a newline so they can be fed to the batch path unchanged.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        let path = &self.paths.rc_path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.paths.explicit => {
                log::debug!("no rc file at {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
            }
            Err(e) => return Err(ConfigError::IoError(e)),
        };

        let lines: Vec<String> = content.lines().filter_map(Self::process_line).collect();
        log::debug!("loaded {} command(s) from {}", lines.len(), path.display());
        Ok(lines)
    }

    fn process_line(line: &str) -> Option<String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(format!("{}\n", trimmed))
    }
}
