//! tracectl - Command-line control of tracing sessions.
//!
//! tracectl talks to a session daemon on behalf of the user. Commands are
//! addressed to a named tracing session, given explicitly with `--session`
//! or taken from the ambient session recorded in the rc file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, option parsing and action dispatch
//! - [`config`] - Home directory, rc file and daemon socket resolution
//! - [`control`] - Session daemon client and status codes
//! - [`error`] - Error types and result aliases
//! - [`session`] - Ambient session lookup and per-invocation session context
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use tracectl::cli::{parse_options, ParseOutcome};
//!
//! let argv: Vec<String> = ["metadata", "-s", "s1", "regenerate"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let ParseOutcome::Run(options) = parse_options(&argv).unwrap() else {
//!     panic!("expected options");
//! };
//! assert_eq!(options.session.as_deref(), Some("s1"));
//! assert_eq!(options.residual, ["regenerate"]);
//! ```

pub mod cli;
pub mod config;
pub mod control;
pub mod error;
pub mod session;
pub mod ui;

pub use error::{Result, TracectlError};
