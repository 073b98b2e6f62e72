use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::core::commands::Context;
use crate::core::env::EnvVarManager;

static CURRENT_DIR: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process working directory.
pub(crate) fn lock_current_dir() -> MutexGuard<'static, ()> {
    CURRENT_DIR.lock().unwrap_or_else(|e| e.into_inner())
}

/// Holds the working-directory lock and restores the directory on drop.
pub(crate) struct CwdGuard {
    previous: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub(crate) fn new() -> Self {
        let lock = lock_current_dir();
        Self {
            previous: env::current_dir().unwrap(),
            _lock: lock,
        }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.previous);
    }
}

/// Owns everything a `Context` borrows, with in-memory output streams.
pub(crate) struct Captured {
    pub env: EnvVarManager,
    pub last_status: u8,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Captured {
    pub(crate) fn new(env: EnvVarManager) -> Self {
        Self {
            env,
            last_status: 0,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub(crate) fn context(&mut self) -> Context<'_> {
        Context {
            env: &mut self.env,
            last_status: self.last_status,
            stdout: &mut self.stdout,
            stderr: &mut self.stderr,
        }
    }

    pub(crate) fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub(crate) fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Writes an executable `/bin/sh` script into `dir`.
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}
