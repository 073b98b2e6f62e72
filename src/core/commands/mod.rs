use std::collections::BTreeMap;
use std::io::{self, Write};

mod cd;
mod env;
mod exit;
mod setenv;
mod unsetenv;

pub use cd::CdCommand;
pub use env::EnvCommand;
pub use exit::{parse_exit_code, ExitCommand};
pub use setenv::SetenvCommand;
pub use unsetenv::UnsetenvCommand;

use crate::core::env::{EnvError, EnvVarManager};
use crate::core::tokenizer::CommandLine;
use crate::path;
use crate::process::{ProcessError, ProcessExecutor};

pub const STATUS_USAGE: u8 = 1;
pub const STATUS_ILLEGAL_NUMBER: u8 = 2;
pub const STATUS_NOT_EXECUTABLE: u8 = 126;
pub const STATUS_NOT_FOUND: u8 = 127;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    /// Carries the fixed usage line of the builtin.
    InvalidArguments(&'static str),
    IllegalNumber(String),
    SetVar {
        name: String,
        value: String,
        source: EnvError,
    },
    UnsetVar {
        name: String,
        source: EnvError,
    },
    IoError(io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    /// Exit status recorded when this error ends a command.
    pub fn status(&self) -> u8 {
        match self {
            CommandError::NotFound(_) => STATUS_NOT_FOUND,
            CommandError::IllegalNumber(_) => STATUS_ILLEGAL_NUMBER,
            CommandError::InvalidArguments(_)
            | CommandError::SetVar { .. }
            | CommandError::UnsetVar { .. }
            | CommandError::IoError(_) => STATUS_USAGE,
            CommandError::ProcessError(ProcessError::Spawn { source, .. }) => {
                if source.kind() == io::ErrorKind::NotFound {
                    STATUS_NOT_FOUND
                } else {
                    STATUS_NOT_EXECUTABLE
                }
            }
            CommandError::ProcessError(_) => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "{}: command not found", cmd),
            CommandError::InvalidArguments(usage) => write!(f, "{}", usage),
            CommandError::IllegalNumber(arg) => write!(f, "exit: Illegal number: {}", arg),
            CommandError::SetVar { name, value, .. } => {
                write!(f, "Failed to set environment variable: {}={}", name, value)
            }
            CommandError::UnsetVar { name, .. } => {
                write!(f, "Failed to unset environment variable: {}", name)
            }
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the command loop does after a command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue(u8),
    Exit(u8),
}

impl Flow {
    pub fn status(self) -> u8 {
        match self {
            Flow::Continue(status) | Flow::Exit(status) => status,
        }
    }
}

/// Shell state a command may read or mutate.
pub struct Context<'a> {
    pub env: &'a mut EnvVarManager,
    pub last_status: u8,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

pub trait Command {
    /// `args` excludes the command name.
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError>;
}

#[derive(Clone, Debug)]
enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
    Cd(CdCommand),
    Setenv(SetenvCommand),
    Unsetenv(UnsetenvCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, ctx),
            CommandType::Env(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Setenv(cmd) => cmd.execute(args, ctx),
            CommandType::Unsetenv(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// Routes a command line to a builtin or to an external program.
#[derive(Clone, Debug)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit", CommandType::Exit(ExitCommand::new()));
        commands.insert("env", CommandType::Env(EnvCommand::new()));
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("setenv", CommandType::Setenv(SetenvCommand::new()));
        commands.insert("unsetenv", CommandType::Unsetenv(UnsetenvCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn builtin_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.keys().copied()
    }

    /// Runs one command line.
    ///
    /// Command errors are reported on `ctx.stderr` and turned into a status.
    /// Only a process failure that ends the shell is returned.
    pub fn execute(&self, line: &CommandLine, ctx: &mut Context<'_>) -> Result<Flow, ProcessError> {
        let Some(name) = line.name() else {
            return Ok(Flow::Continue(ctx.last_status));
        };

        let result = match self.commands.get(name) {
            Some(cmd) => cmd.execute(line.operands(), ctx),
            None => self.run_external(name, line.args(), ctx),
        };

        match result {
            Ok(flow) => Ok(flow),
            Err(CommandError::ProcessError(err)) if err.is_fatal() => Err(err),
            Err(err) => {
                report(ctx.stderr, &err);
                Ok(Flow::Continue(err.status()))
            }
        }
    }

    fn run_external(
        &self,
        name: &str,
        args: &[String],
        ctx: &mut Context<'_>,
    ) -> Result<Flow, CommandError> {
        let program =
            path::resolve(name, ctx.env).ok_or_else(|| CommandError::NotFound(name.to_string()))?;

        ctx.stdout.flush()?;
        let status = self.process_executor.run(&program, args, ctx.env)?;
        Ok(Flow::Continue(status))
    }
}

/// Writes a command diagnostic the way the shell presents it.
pub fn report(stderr: &mut dyn Write, err: &CommandError) {
    let written = match err {
        CommandError::InvalidArguments(usage) => writeln!(stderr, "{}", usage),
        _ => writeln!(stderr, "myshell: {}", err),
    };
    if let Err(e) = written {
        log::warn!("failed to write diagnostic: {}", e);
    }
}
