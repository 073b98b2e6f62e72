use super::EnvError;
use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

/// The shell's environment variable store.
///
/// Seeded from the host process once at startup. Children receive exactly
/// these entries; the host process environment is never written back.
/// Inherited entries are kept as raw bytes, so values that are not UTF-8
/// still reach children unchanged.
#[derive(Clone, Debug, Default)]
pub struct EnvVarManager {
    vars: HashMap<OsString, OsString>,
}

impl EnvVarManager {
    pub fn new() -> Self {
        Self {
            vars: env::vars_os().collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_os_string(), v.as_ref().to_os_string()))
                .collect(),
        }
    }

    /// The value of `name`, if it is set and valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_os(name).and_then(OsStr::to_str)
    }

    pub fn get_os(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(name)).map(OsString::as_os_str)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        Self::validate_name(name)?;
        if value.contains('\0') {
            return Err(EnvError::InvalidValue(value.to_string()));
        }

        self.vars.insert(name.into(), value.into());
        Ok(())
    }

    /// Removes `name`, returning whether it was present. Removing an unset
    /// variable is not an error.
    pub fn remove(&mut self, name: &str) -> Result<bool, EnvError> {
        Self::validate_name(name)?;
        Ok(self.vars.remove(OsStr::new(name)).is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    // Same rules as setenv(3): non-empty, no '=' and no NUL.
    fn validate_name(name: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains('=') || name.contains('\0') {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}
