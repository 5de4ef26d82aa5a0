//! Trace-control service access.
//!
//! - [`TraceControl`] is the seam commands call through
//! - [`SessiondClient`] talks to a running session daemon
//! - [`describe_status`] turns daemon status codes into text

mod client;
mod status;

pub use client::{ControlRequest, ControlResponse, SessiondClient};
pub use status::{describe_status, ErrorCode};

/// Operations the session daemon performs on behalf of commands.
///
/// Every call blocks until the daemon answers. A return of `0` means
/// success; anything else is a daemon status code, usually negative.
pub trait TraceControl {
    /// Regenerate and overwrite the metadata of a session.
    fn regenerate_metadata(&self, session_name: &str) -> i32;
}
