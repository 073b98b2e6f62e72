use std::fmt;
use std::path::PathBuf;

pub mod executor;
pub mod status;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    /// The program could not be started.
    Spawn {
        program: PathBuf,
        source: std::io::Error,
    },
    /// Waiting for the child failed. The shell cannot continue after this.
    Wait(std::io::Error),
    /// Flushing the shell's own output before spawning failed.
    Io(std::io::Error),
}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Wait(_))
    }
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn { program, source } => {
                write!(f, "{}: {}", program.display(), source)
            }
            ProcessError::Wait(e) => write!(f, "wait: {}", e),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::Spawn { source, .. } => Some(source),
            ProcessError::Wait(e) | ProcessError::Io(e) => Some(e),
        }
    }
}
