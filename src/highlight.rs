use inksac::prelude::*;

/// Colors the command line as it is typed at the interactive prompt.
#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn without_color() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
        }
    }

    pub fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Builtins are shown in cyan, other commands in green, flags in yellow.
    /// Delimiters are kept as typed so the cursor position stays valid.
    pub fn highlight_command(&self, input: &str, is_builtin: impl Fn(&str) -> bool) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        let mut seen_command = false;
        for (i, piece) in split_keeping_delimiters(input).into_iter().enumerate() {
            let is_word = i % 2 == 1;
            if !is_word || piece.is_empty() {
                output.push_str(piece);
            } else if !seen_command {
                seen_command = true;
                let style = if is_builtin(piece) {
                    Style::builder().foreground(Color::Cyan).bold().build()
                } else {
                    Style::builder().foreground(Color::Green).build()
                };
                output.push_str(&piece.style(style).to_string());
            } else if piece.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                output.push_str(&piece.style(flag_style).to_string());
            } else {
                output.push_str(piece);
            }
        }
        output
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }
}

/// Splits into alternating runs: delimiters, word, delimiters, word, ...
/// The first element is always a (possibly empty) delimiter run.
fn split_keeping_delimiters(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_word = false;

    for (i, c) in input.char_indices() {
        let is_delim = c.is_whitespace();
        if is_delim == in_word {
            pieces.push(&input[start..i]);
            start = i;
            in_word = !in_word;
        }
    }
    pieces.push(&input[start..]);
    pieces
}
