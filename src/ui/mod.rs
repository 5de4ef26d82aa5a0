//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the real stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use tracectl::ui::{MockUI, Target, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Metadata successfully regenerated for session s1");
//! ui.write_text("usage: tracectl metadata [OPTION] ACTION\n", Target::Stderr);
//!
//! assert!(ui.has_message("session s1"));
//! assert!(ui.stderr_text().starts_with("usage:"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::{OutputMode, Target};
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, TracectlTheme};

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational line on stdout.
    ///
    /// Suppressed in [`OutputMode::Quiet`].
    fn message(&mut self, msg: &str);

    /// Display a warning on stderr.
    fn warning(&mut self, msg: &str);

    /// Display a diagnostic on stderr.
    fn error(&mut self, msg: &str);

    /// Write a block of text (usage, listings) verbatim.
    ///
    /// Never suppressed.
    fn write_text(&mut self, text: &str, target: Target);
}
