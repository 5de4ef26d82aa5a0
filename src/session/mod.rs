//! Session name resolution.
//!
//! Commands act on one named session. The name comes either from
//! `--session` or from the ambient session recorded in the rc file:
//! - [`SessionResolver`] looks up the ambient session
//! - [`SessionContext`] holds the effective name for one invocation and
//!   releases an ambient name when it goes out of scope

mod context;
mod resolver;

pub use context::{AmbientSession, SessionContext};
pub use resolver::{RcSessionResolver, SessionResolver};
