//! Ambient session lookup.

use std::path::{Path, PathBuf};

use crate::config::RcFile;
use crate::error::Result;

/// Source of the ambient session name.
pub trait SessionResolver {
    /// The current session, or `None` when no session is configured.
    fn current_session_name(&self) -> Result<Option<String>>;

    /// Give back a name obtained from [`current_session_name`].
    ///
    /// Called exactly once per resolved name.
    ///
    /// [`current_session_name`]: SessionResolver::current_session_name
    fn release(&self, name: &str);
}

/// Resolver reading the `session` key of the rc file.
#[derive(Debug, Clone)]
pub struct RcSessionResolver {
    rc_path: PathBuf,
}

impl RcSessionResolver {
    /// Create a resolver for the rc file at `rc_path`.
    pub fn new(rc_path: impl Into<PathBuf>) -> Self {
        Self {
            rc_path: rc_path.into(),
        }
    }

    /// Path of the rc file consulted.
    pub fn rc_path(&self) -> &Path {
        &self.rc_path
    }
}

impl SessionResolver for RcSessionResolver {
    fn current_session_name(&self) -> Result<Option<String>> {
        let name = RcFile::load(&self.rc_path)?
            .and_then(|rc| rc.session_name().map(str::to_string));

        match &name {
            Some(name) => tracing::debug!("Ambient session is {name}"),
            None => tracing::debug!("No ambient session in {}", self.rc_path.display()),
        }
        Ok(name)
    }

    fn release(&self, name: &str) {
        tracing::trace!("Released ambient session name {name}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_session_from_rc_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".tracectlrc");
        fs::write(&path, "session=nightly\n").unwrap();

        let resolver = RcSessionResolver::new(&path);
        assert_eq!(
            resolver.current_session_name().unwrap(),
            Some("nightly".to_string())
        );
    }

    #[test]
    fn missing_rc_file_is_none() {
        let temp = TempDir::new().unwrap();
        let resolver = RcSessionResolver::new(temp.path().join(".tracectlrc"));
        assert_eq!(resolver.current_session_name().unwrap(), None);
    }

    #[test]
    fn rc_file_without_session_is_none() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".tracectlrc");
        fs::write(&path, "# nothing here\nother=value\n").unwrap();

        let resolver = RcSessionResolver::new(&path);
        assert_eq!(resolver.current_session_name().unwrap(), None);
    }

    #[test]
    fn rc_path_accessor() {
        let resolver = RcSessionResolver::new("/home/a/.tracectlrc");
        assert_eq!(resolver.rc_path(), Path::new("/home/a/.tracectlrc"));
    }
}
