//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, UserInterface, UxrayTheme};

/// Terminal UI writing styled output to stdout/stderr.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: UxrayTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            UxrayTheme::new()
        } else {
            UxrayTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
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
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_decoration() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
            writeln!(self.term).ok();
        }
    }
}

/// Create the UI for the current invocation.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_reports_its_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_builds_a_terminal_ui() {
        let ui = create_ui(OutputMode::Normal);
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }
}
