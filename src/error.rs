use crate::core::config::ConfigError;
use crate::process::ProcessError;

/// Errors that end the shell.
#[derive(Debug)]
pub enum ShellError {
    Readline(rustyline::error::ReadlineError),
    Io(std::io::Error),
    /// End of input at the interactive prompt.
    InputClosed,
    ProcessError(ProcessError),
    ConfigError(ConfigError),
    FlagError(String),
}

impl ShellError {
    /// Status the shell exits with when this error ends it.
    pub fn exit_status(&self) -> u8 {
        match self {
            ShellError::FlagError(_) => 2,
            _ => 1,
        }
    }
}

impl From<rustyline::error::ReadlineError> for ShellError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        ShellError::Readline(err)
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<ProcessError> for ShellError {
    fn from(err: ProcessError) -> Self {
        ShellError::ProcessError(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::ConfigError(err)
    }
}

impl std::fmt::Display for ShellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShellError::Readline(e) => write!(f, "Readline error: {}", e),
            ShellError::Io(e) => write!(f, "IO error: {}", e),
            ShellError::InputClosed => write!(f, "read error: end of input"),
            ShellError::ProcessError(e) => write!(f, "{}", e),
            ShellError::ConfigError(e) => write!(f, "Config error: {}", e),
            ShellError::FlagError(msg) => write!(f, "Flag error: {}", msg),
        }
    }
}

impl std::error::Error for ShellError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_wait_failure_maps_to_process_error() {
        let err: ShellError = ProcessError::Wait(io::Error::other("no child")).into();
        assert!(matches!(err, ShellError::ProcessError(ProcessError::Wait(_))));
        assert_eq!(err.to_string(), "wait: no child");
        assert_eq!(err.exit_status(), 1);
    }

    #[test]
    fn test_exit_statuses() {
        assert_eq!(ShellError::InputClosed.exit_status(), 1);
        assert_eq!(ShellError::FlagError("x".into()).exit_status(), 2);
    }
}
