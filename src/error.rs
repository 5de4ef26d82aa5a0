//! Error types for tracectl operations.
//!
//! This module defines [`TracectlError`], the error type shared by every
//! command, and a [`Result`] type alias for convenience.
//!
//! # Exit statuses
//!
//! Every error maps to a process exit status through
//! [`TracectlError::exit_status`]. Local failures use the small command
//! statuses ([`CMD_ERROR`], [`CMD_UNDEFINED`]); a failure reported by the
//! session daemon keeps its status code verbatim.

use thiserror::Error;

/// Command completed.
pub const CMD_SUCCESS: i32 = 0;

/// Command failed locally (usage, missing session, I/O).
pub const CMD_ERROR: i32 = 1;

/// Unknown option or action.
pub const CMD_UNDEFINED: i32 = 2;

/// Core error type for tracectl operations.
#[derive(Debug, Error)]
pub enum TracectlError {
    /// Malformed invocation (empty argument vector, missing action).
    #[error("{message}")]
    Usage { message: String },

    /// Option parsing failed on an unrecognized or incomplete option.
    #[error("Invalid option: {message}")]
    InvalidOption { message: String },

    /// The action name matched no registry entry.
    #[error("Undefined command: {name}")]
    UndefinedAction { name: String },

    /// Neither `--session` nor the ambient rc file named a session.
    #[error("No session found. Use --session or create a session first")]
    NoSession,

    /// The session daemon returned a non-zero status.
    #[error("{}", crate::control::describe_status(*code))]
    Service { code: i32 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TracectlError {
    /// Exit status this error terminates the command with.
    ///
    /// A daemon failure returns its status code unchanged. The process can
    /// only exit with the low 8 bits of it, so a status of -23 leaves the
    /// process as 233 (see [`CommandOutcome::process_exit_code`]).
    ///
    /// [`CommandOutcome::process_exit_code`]: crate::cli::CommandOutcome::process_exit_code
    pub fn exit_status(&self) -> i32 {
        match self {
            Self::InvalidOption { .. } | Self::UndefinedAction { .. } => CMD_UNDEFINED,
            Self::Service { code } => *code,
            Self::Usage { .. } | Self::NoSession | Self::Io(_) | Self::Other(_) => CMD_ERROR,
        }
    }
}

/// Result type alias for tracectl operations.
pub type Result<T> = std::result::Result<T, TracectlError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::ErrorCode;

    #[test]
    fn usage_displays_message() {
        let err = TracectlError::Usage {
            message: "Missing action".into(),
        };
        assert_eq!(err.to_string(), "Missing action");
        assert_eq!(err.exit_status(), CMD_ERROR);
    }

    #[test]
    fn invalid_option_is_undefined() {
        let err = TracectlError::InvalidOption {
            message: "unexpected argument: --bogus".into(),
        };
        assert!(err.to_string().contains("--bogus"));
        assert_eq!(err.exit_status(), CMD_UNDEFINED);
    }

    #[test]
    fn undefined_action_displays_name() {
        let err = TracectlError::UndefinedAction {
            name: "rebuild".into(),
        };
        assert!(err.to_string().contains("rebuild"));
        assert_eq!(err.exit_status(), CMD_UNDEFINED);
    }

    #[test]
    fn no_session_is_error() {
        assert_eq!(TracectlError::NoSession.exit_status(), CMD_ERROR);
    }

    #[test]
    fn service_keeps_code_verbatim() {
        let code = -(ErrorCode::SessionNotFound as i32);
        let err = TracectlError::Service { code };
        assert_eq!(err.exit_status(), code);
        assert_eq!(err.to_string(), "Session name not found");
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: TracectlError = io_err.into();
        assert!(matches!(err, TracectlError::Io(_)));
        assert_eq!(err.exit_status(), CMD_ERROR);
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(TracectlError::NoSession)
        }
        assert!(returns_error().is_err());
    }
}
