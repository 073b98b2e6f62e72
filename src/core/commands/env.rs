use super::{Command, CommandError, Context, Flow};
use std::os::unix::ffi::OsStrExt;

/// Prints every entry of the environment store, unsorted.
#[derive(Clone, Debug, Default)]
pub struct EnvCommand;

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(&self, _args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        for (name, value) in ctx.env.iter() {
            ctx.stdout.write_all(name.as_bytes())?;
            ctx.stdout.write_all(b"=")?;
            ctx.stdout.write_all(value.as_bytes())?;
            ctx.stdout.write_all(b"\n")?;
        }
        ctx.stdout.flush()?;
        Ok(Flow::Continue(0))
    }
}
