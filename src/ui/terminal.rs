//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, Target, TracectlTheme, UserInterface};

/// Terminal UI implementation.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: TracectlTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// `color` is `false` when `--no-color` was given.
    pub fn new(mode: OutputMode, color: bool) -> Self {
        let theme = if color && should_use_colors() {
            TracectlTheme::new()
        } else {
            TracectlTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn write_text(&mut self, text: &str, target: Target) {
        let term = match target {
            Target::Stdout => &mut self.out,
            Target::Stderr => &mut self.err,
        };
        term.write_all(text.as_bytes()).ok();
        term.flush().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_preserved() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn no_color_uses_plain_theme() {
        let ui = TerminalUI::new(OutputMode::Normal, false);
        assert_eq!(ui.theme.format_error("x"), "Error: x");
    }
}
