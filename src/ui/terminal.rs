//! Terminal UI.

use std::io::Write;

use console::Term;

use super::{should_use_colors, NyTheme, UserInterface};

/// UI writing informational lines to stdout and diagnostics to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    out_theme: NyTheme,
    err_theme: NyTheme,
}

impl TerminalUI {
    /// Create a terminal UI. `color` is false when `NO_COLOR` is set.
    pub fn new(color: bool) -> Self {
        let out = Term::stdout();
        let err = Term::stderr();
        let theme_for = |term: &Term| {
            if should_use_colors(color, term) {
                NyTheme::new()
            } else {
                NyTheme::plain()
            }
        };

        Self {
            out_theme: theme_for(&out),
            err_theme: theme_for(&err),
            out,
            err,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.err_theme.format_error(msg)).ok();
    }

    fn command(&mut self, line: &str) {
        writeln!(self.out, "{}", self.out_theme.format_command(line)).ok();
    }
}
