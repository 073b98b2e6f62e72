/// Number of argument slots a command line can hold.
pub const MAX_ARGS: usize = 20;

/// Delimiters used for lines read at the interactive prompt.
pub const INTERACTIVE_DELIMITERS: &[char] = &[' ', '\n', '\t'];

/// Delimiters used for lines handed over by a batch source, after the
/// line terminator has been stripped.
pub const BATCH_DELIMITERS: &[char] = &[' ', '\t'];

/// A tokenized command line: `args[0]` is the command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<String>,
}

impl CommandLine {
    pub fn name(&self) -> Option<&str> {
        self.slot(0)
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Arguments following the command name.
    pub fn operands(&self) -> &[String] {
        self.args.get(1..).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns the argument in slot `index`, or `None` past the last token.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// All `MAX_ARGS` slots, unused ones reading as `None`.
    pub fn slots(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        (0..MAX_ARGS).map(move |i| self.slot(i))
    }
}

/// Splits `line` on any of `delimiters`, collapsing delimiter runs.
///
/// At most `MAX_ARGS` tokens are kept; anything after that is dropped.
pub fn tokenize(line: &str, delimiters: &[char]) -> CommandLine {
    let mut tokens = line
        .split(|c: char| delimiters.contains(&c))
        .filter(|token| !token.is_empty());

    let args: Vec<String> = tokens.by_ref().take(MAX_ARGS).map(String::from).collect();

    let dropped = tokens.count();
    if dropped > 0 {
        log::warn!(
            "command line exceeds {} arguments, dropped {} trailing token(s)",
            MAX_ARGS,
            dropped
        );
    }

    CommandLine { args }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_delimiter_runs() {
        let line = tokenize("ls -l  /tmp\n", INTERACTIVE_DELIMITERS);
        assert_eq!(line.args(), ["ls", "-l", "/tmp"]);

        let slots: Vec<Option<&str>> = line.slots().collect();
        assert_eq!(slots.len(), MAX_ARGS);
        assert_eq!(&slots[..3], &[Some("ls"), Some("-l"), Some("/tmp")]);
        assert!(slots[3..].iter().all(Option::is_none));
    }

    #[test]
    fn test_tabs_and_leading_delimiters() {
        let line = tokenize("\t  echo\ta \t b  ", BATCH_DELIMITERS);
        assert_eq!(line.name(), Some("echo"));
        assert_eq!(line.operands(), ["a", "b"]);
    }

    #[test]
    fn test_batch_delimiters_keep_newline() {
        let line = tokenize("echo a\nb", BATCH_DELIMITERS);
        assert_eq!(line.args(), ["echo", "a\nb"]);
    }

    #[test]
    fn test_blank_line_is_empty() {
        let line = tokenize("   \t \n", INTERACTIVE_DELIMITERS);
        assert!(line.is_empty());
        assert_eq!(line.name(), None);
        assert!(line.operands().is_empty());
        assert!(line.slots().all(|s| s.is_none()));
    }

    #[test]
    fn test_truncates_past_capacity() {
        let input: Vec<String> = (0..25).map(|i| format!("a{}", i)).collect();
        let line = tokenize(&input.join(" "), INTERACTIVE_DELIMITERS);
        assert_eq!(line.len(), MAX_ARGS);
        assert_eq!(line.slot(MAX_ARGS - 1), Some("a19"));
        assert_eq!(line.slot(MAX_ARGS), None);
    }
}
