//! Command outcome translation.
//!
//! Turns the final result of a command into the process exit status and
//! the diagnostic printed on stderr. Early exits (help, listings) arrive
//! here as plain successes and produce no diagnostic.

use std::process::ExitCode;

use crate::cli::commands::CommandResult;
use crate::error::Result;
use crate::ui::UserInterface;

/// Final status of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit status; a daemon failure keeps its code verbatim.
    pub exit_code: i32,
    /// Diagnostic for failures.
    pub diagnostic: Option<String>,
}

impl CommandOutcome {
    /// Translate a command result.
    ///
    /// Errors propagate with `?` from the point they happen, so the result
    /// already carries the failure closest to the daemon call.
    pub fn from_result(result: Result<CommandResult>) -> Self {
        match result {
            Ok(result) => Self {
                exit_code: result.exit_code,
                diagnostic: None,
            },
            Err(err) => {
                tracing::debug!("Command failed: {err:?}");
                Self {
                    exit_code: err.exit_status(),
                    diagnostic: Some(err.to_string()),
                }
            }
        }
    }

    /// Print the diagnostic, if any.
    pub fn report(&self, ui: &mut dyn UserInterface) {
        if let Some(diagnostic) = &self.diagnostic {
            ui.error(diagnostic);
        }
    }

    /// Low 8 bits of the exit status, as `exit()` would keep them.
    pub fn exit_byte(&self) -> u8 {
        self.exit_code as u8
    }

    /// Process exit code.
    pub fn process_exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_byte())
    }
}
