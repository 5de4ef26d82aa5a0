//! Visual theme and styling.

use console::Style;

/// Styles for diagnostics.
///
/// Only stderr output is styled; stdout stays plain so it can be piped.
#[derive(Debug, Clone)]
pub struct TracectlTheme {
    /// Style for error prefixes (red bold).
    pub error: Style,
    /// Style for warning prefixes (orange).
    pub warning: Style,
}

impl Default for TracectlTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TracectlTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            error: Style::new().red().bold().for_stderr(),
            warning: Style::new().color256(208).for_stderr(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            error: Style::new().for_stderr(),
            warning: Style::new().for_stderr(),
        }
    }

    /// Format an error line.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("Error:"), msg)
    }

    /// Format a warning line.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("Warning:"), msg)
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
