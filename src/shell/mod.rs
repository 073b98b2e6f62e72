use std::borrow::Cow;
use std::io::{BufRead, Write};

use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

mod executor;

use crate::{
    core::{
        commands::{CommandExecutor, Context, Flow},
        config::Config,
        env::EnvVarManager,
        tokenizer::{CommandLine, BATCH_DELIMITERS, INTERACTIVE_DELIMITERS},
    },
    error::ShellError,
    input::ShellHelper,
};

use executor::CommandHandler;

pub const PROMPT: &str = "myshell$ ";

/// A shell session: the environment store, the dispatcher and the status
/// of the last command.
pub struct Shell {
    pub(crate) env: EnvVarManager,
    pub(crate) executor: CommandExecutor,
    pub(crate) last_status: u8,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    /// Starts a session with a copy of the host process environment.
    pub fn new() -> Self {
        Self::with_env(EnvVarManager::new())
    }

    pub fn with_env(env: EnvVarManager) -> Self {
        Shell {
            env,
            executor: CommandExecutor::new(),
            last_status: 0,
        }
    }

    pub fn last_status(&self) -> u8 {
        self.last_status
    }

    pub fn env(&self) -> &EnvVarManager {
        &self.env
    }

    /// Runs the rc file's commands. Returns the status to exit with if one
    /// of them was `exit`.
    pub fn load_config(&mut self, config: &Config) -> Result<Option<u8>, ShellError> {
        for line in config.load()? {
            if let Flow::Exit(status) = self.run_line(&line)? {
                return Ok(Some(status));
            }
        }
        Ok(None)
    }

    /// The interactive loop. Returns the status passed to `exit`.
    ///
    /// End of input is not a normal way out: it surfaces as
    /// `ShellError::InputClosed`.
    pub fn run(&mut self) -> Result<u8, ShellError> {
        let mut editor = Editor::<ShellHelper, DefaultHistory>::new()?;
        editor.set_helper(Some(ShellHelper::new(self.executor.builtin_names())));

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if let Flow::Exit(status) =
                        self.execute_command(&line, INTERACTIVE_DELIMITERS)?
                    {
                        return Ok(status);
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Err(ShellError::InputClosed),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Runs one newline-terminated command line from a batch source and
    /// hands control back to the caller.
    pub fn run_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        self.execute_command(line, BATCH_DELIMITERS)
    }

    /// Feeds every line of `reader` to `run_line`. Returns the status of the
    /// `exit` that stopped it, or the last status at end of input.
    ///
    /// Lines are read as raw bytes. Invalid UTF-8 is replaced rather than
    /// treated as a read failure, so it only affects its own command.
    pub fn run_batch<R: BufRead>(&mut self, mut reader: R) -> Result<u8, ShellError> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(self.last_status);
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                log::warn!("replaced invalid UTF-8 in input line");
            }
            if let Flow::Exit(status) = self.run_line(&line)? {
                return Ok(status);
            }
        }
    }

    /// Dispatches an already tokenized command, writing builtin output and
    /// diagnostics to the given streams, and records its status.
    pub fn dispatch_with(
        &mut self,
        command: &CommandLine,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Flow, ShellError> {
        let mut ctx = Context {
            env: &mut self.env,
            last_status: self.last_status,
            stdout,
            stderr,
        };
        let flow = self.executor.execute(command, &mut ctx)?;
        self.last_status = flow.status();
        Ok(flow)
    }
}
