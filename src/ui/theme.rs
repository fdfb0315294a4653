//! Visual theme and styling.

use console::Style;

/// ny's visual theme.
#[derive(Debug, Clone)]
pub struct NyTheme {
    /// Style for the `error:` label (red bold).
    pub error: Style,
    /// Style for echoed command lines (dim).
    pub command: Style,
}

impl Default for NyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl NyTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold(),
            command: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            error: Style::new(),
            command: Style::new(),
        }
    }

    /// Format an error (`error: ...`).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("error:"), msg)
    }

    /// Format an echoed command line (`$ ...`).
    pub fn format_command(&self, line: &str) -> String {
        format!("{}", self.command.apply_to(format!("$ {}", line)))
    }
}

/// Check if colors should be enabled for a stream.
///
/// `color` is the `NO_COLOR`-derived setting; styling additionally needs a
/// terminal.
pub fn should_use_colors(color: bool, term: &console::Term) -> bool {
    color && term.is_term()
}
