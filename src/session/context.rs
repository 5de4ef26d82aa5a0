//! Effective session for one command invocation.

use crate::error::{Result, TracectlError};

use super::SessionResolver;

/// Ambient session name, released back to its resolver on drop.
pub struct AmbientSession<'r> {
    name: String,
    resolver: &'r dyn SessionResolver,
}

impl AmbientSession<'_> {
    /// Name of the ambient session.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for AmbientSession<'_> {
    fn drop(&mut self) {
        self.resolver.release(&self.name);
    }
}

impl std::fmt::Debug for AmbientSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmbientSession")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The session a command applies to.
#[derive(Debug)]
pub enum SessionContext<'a> {
    /// Named with `--session`; the caller keeps ownership.
    Explicit(&'a str),
    /// Looked up through a [`SessionResolver`]; released on drop.
    Ambient(AmbientSession<'a>),
}

impl<'a> SessionContext<'a> {
    /// Resolve the effective session.
    ///
    /// An explicit override wins and the resolver is never consulted.
    /// Otherwise the ambient session is used, and its absence fails with
    /// [`TracectlError::NoSession`].
    pub fn resolve(
        session_override: Option<&'a str>,
        resolver: &'a dyn SessionResolver,
    ) -> Result<Self> {
        if let Some(name) = session_override {
            tracing::debug!("Using session {name} from --session");
            return Ok(Self::Explicit(name));
        }

        match resolver.current_session_name()? {
            Some(name) => Ok(Self::Ambient(AmbientSession { name, resolver })),
            None => Err(TracectlError::NoSession),
        }
    }

    /// Effective session name.
    pub fn name(&self) -> &str {
        match self {
            Self::Explicit(name) => name,
            Self::Ambient(ambient) => ambient.name(),
        }
    }

    /// Whether this context releases the name when dropped.
    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Ambient(_))
    }
}
