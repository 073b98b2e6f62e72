use super::{Command, CommandError, Context, Flow};

pub const SETENV_USAGE: &str = "Usage: setenv VARIABLE VALUE";

#[derive(Clone, Debug, Default)]
pub struct SetenvCommand;

impl SetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetenvCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let [name, value, ..] = args else {
            return Err(CommandError::InvalidArguments(SETENV_USAGE));
        };

        ctx.env
            .set(name, value)
            .map_err(|source| CommandError::SetVar {
                name: name.clone(),
                value: value.clone(),
                source,
            })?;

        log::debug!("setenv {}={}", name, value);
        Ok(Flow::Continue(0))
    }
}
