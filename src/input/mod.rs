use std::borrow::Cow;
use std::collections::BTreeSet;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Helper,
};

use crate::highlight::SyntaxHighlighter;

/// Line-editor helper for the interactive prompt. Only highlighting is
/// provided; completion and hints stay at rustyline's defaults.
#[derive(Clone)]
pub struct ShellHelper {
    builtins: BTreeSet<&'static str>,
    highlighter: SyntaxHighlighter,
}

impl ShellHelper {
    pub fn new(builtins: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            builtins: builtins.into_iter().collect(),
            highlighter: SyntaxHighlighter::new(),
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.highlighter.enabled() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(
            self.highlighter
                .highlight_command(line, |name| self.builtins.contains(name)),
        )
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.highlighter.enabled()
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;
}
