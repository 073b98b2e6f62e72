use super::{Command, CommandError, Context, Flow};
use crate::process::status;

#[derive(Clone, Debug, Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

/// Parses the argument of `exit`.
///
/// Rejects text that is not an integer, negative values, and a zero whose
/// text does not start with `'0'` (such as `+0` or `-0`). Values above 255
/// wrap modulo 256.
pub fn parse_exit_code(text: &str) -> Option<u8> {
    let value: i64 = text.parse().ok()?;
    if value < 0 || (value == 0 && !text.starts_with('0')) {
        return None;
    }
    Some(status::normalize(value))
}

impl Command for ExitCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match args.first() {
            None => Ok(Flow::Exit(ctx.last_status)),
            Some(arg) => parse_exit_code(arg)
                .map(Flow::Exit)
                .ok_or_else(|| CommandError::IllegalNumber(arg.clone())),
        }
    }
}
