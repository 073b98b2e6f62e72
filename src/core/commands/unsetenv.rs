use super::{Command, CommandError, Context, Flow};

pub const UNSETENV_USAGE: &str = "Usage: unsetenv VARIABLE";

#[derive(Clone, Debug, Default)]
pub struct UnsetenvCommand;

impl UnsetenvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetenvCommand {
    fn execute(&self, args: &[String], ctx: &mut Context<'_>) -> Result<Flow, CommandError> {
        let [name, ..] = args else {
            return Err(CommandError::InvalidArguments(UNSETENV_USAGE));
        };

        let existed = ctx
            .env
            .remove(name)
            .map_err(|source| CommandError::UnsetVar {
                name: name.clone(),
                source,
            })?;

        if !existed {
            log::debug!("unsetenv: {} was not set", name);
        }
        Ok(Flow::Continue(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::EnvVarManager;
    use crate::testutil::Captured;

    fn unsetenv(captured: &mut Captured, args: &[&str]) -> Result<Flow, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        UnsetenvCommand::new().execute(&args, &mut captured.context())
    }

    #[test]
    fn test_unsetenv_removes() {
        let mut captured = Captured::new(EnvVarManager::from_pairs([("GONE", "soon")]));
        assert_eq!(unsetenv(&mut captured, &["GONE"]).unwrap(), Flow::Continue(0));
        assert_eq!(captured.env.get("GONE"), None);
    }

    #[test]
    fn test_unsetenv_missing_variable_is_silent() {
        let mut captured = Captured::new(EnvVarManager::default());
        assert_eq!(unsetenv(&mut captured, &["NEVER_SET"]).unwrap(), Flow::Continue(0));
        assert!(captured.stderr().is_empty());
        assert!(captured.stdout().is_empty());
    }

    #[test]
    fn test_unsetenv_usage_and_invalid_name() {
        let mut captured = Captured::new(EnvVarManager::default());
        let err = unsetenv(&mut captured, &[]).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments(UNSETENV_USAGE)));

        let err = unsetenv(&mut captured, &["A=B"]).unwrap_err();
        assert_eq!(err.to_string(), "Failed to unset environment variable: A=B");
        assert_eq!(err.status(), 1);
    }
}
