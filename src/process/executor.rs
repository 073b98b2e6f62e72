use std::io::{self, Write};
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use super::{status, ProcessError};
use crate::core::env::EnvVarManager;

/// Runs external programs in the foreground, one at a time.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Runs `program` with `args` (where `args[0]` becomes the child's
    /// argv[0]) and exactly the entries of `env`, blocking until the child
    /// terminates.
    pub fn run(
        &self,
        program: &Path,
        args: &[String],
        env: &EnvVarManager,
    ) -> Result<u8, ProcessError> {
        // Anything the shell printed must reach the terminal before the child
        // starts writing to the same stream.
        io::stdout().flush()?;

        let mut command = Command::new(program);
        if let Some(arg0) = args.first() {
            command.arg0(arg0);
        }
        command
            .args(args.iter().skip(1))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.iter());

        let mut child = command.spawn().map_err(|source| ProcessError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

        log::debug!("spawned {} as pid {}", program.display(), child.id());

        let exit_status = child.wait().map_err(ProcessError::Wait)?;
        let code = status::from_exit_status(exit_status);
        log::debug!("{} finished with {} (status {})", program.display(), exit_status, code);
        Ok(code)
    }
}
