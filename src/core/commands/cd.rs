use super::{Command, CommandError, Context, Flow};
use std::env;
use std::io;

/// Changes the working directory and keeps `PWD`/`OLDPWD` in the store in
/// step with it. Always reports status 0.
#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }

    fn change_dir(&self, target: &str, ctx: &mut Context<'_>) -> io::Result<()> {
        let previous = env::current_dir();
        env::set_current_dir(target)?;

        match env::current_dir() {
            Ok(cwd) => self.record(ctx, "PWD", &cwd.to_string_lossy()),
            Err(e) => log::warn!("cd: can't determine new working directory: {}", e),
        }
        if let Ok(previous) = previous {
            self.record(ctx, "OLDPWD", &previous.to_string_lossy());
        }
        Ok(())
    }

    fn record(&self, ctx: &mut Context<'_>, name: &str, value: &str) {
        if let Err(e) = ctx.env.set(name, value) {
            log::warn!("cd: can't update {}: {}", name, e);
        }
    }

    /// `HOME` and `OLDPWD` jumps fail silently.
    fn change_to_var(&self, name: &str, ctx: &mut Context<'_>) {
        let Some(target) = ctx.env.get(name).map(str::to_owned) else {
            log::debug!("cd: {} is not set", name);
            return;
        };
        if let Err(e) = self.change_dir(&target, ctx) {
            log::debug!("cd: can't change to ${} ({}): {}", name, target, e);
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        match args.first().map(String::as_str) {
            None => self.change_to_var("HOME", ctx),
            Some("-") => self.change_to_var("OLDPWD", ctx),
            Some(dir) => {
                if let Err(e) = self.change_dir(dir, ctx) {
                    log::debug!("cd: {}: {}", dir, e);
                    writeln!(ctx.stderr, "myshell: cd: can't cd to {}", dir)?;
                }
            }
        }
        Ok(Flow::Continue(0))
    }
}
