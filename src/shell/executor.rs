use std::io;

use crate::core::commands::Flow;
use crate::core::tokenizer::tokenize;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str, delimiters: &[char]) -> Result<Flow, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, line: &str, delimiters: &[char]) -> Result<Flow, ShellError> {
        let command = tokenize(line, delimiters);
        if command.is_empty() {
            return Ok(Flow::Continue(self.last_status));
        }

        let mut stdout = io::stdout();
        let mut stderr = io::stderr();
        let flow = self.dispatch_with(&command, &mut stdout, &mut stderr)?;

        log::debug!("{:?} -> {:?}", command.name(), flow);
        Ok(flow)
    }
}
