//! Client configuration.
//!
//! Everything tracectl needs to locate is derived from a single home
//! directory:
//! - the rc file ([`rc`]) holding the ambient session, at `<home>/.tracectlrc`
//! - the session daemon socket, unless `TRACECTL_SESSIOND_SOCKET` overrides it
//!
//! The home directory is `--home` / `TRACECTL_HOME` when given, otherwise
//! the user's home directory.

pub mod rc;

use std::path::{Path, PathBuf};

use crate::error::{Result, TracectlError};

pub use rc::RcFile;

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "TRACECTL_HOME";

/// Environment variable overriding the session daemon socket path.
pub const SOCKET_ENV: &str = "TRACECTL_SESSIOND_SOCKET";

/// File name of the rc file inside the home directory.
pub const RC_FILE_NAME: &str = ".tracectlrc";

const SOCKET_FILE_NAME: &str = "client-sessiond.sock";
const SYSTEM_RUNDIR: &str = "/var/run/tracectl";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    home: PathBuf,
    socket_path: PathBuf,
}

impl ClientConfig {
    /// Build a configuration with explicit paths.
    pub fn new(home: impl Into<PathBuf>, socket_path: impl Into<PathBuf>) -> Self {
        Self {
            home: home.into(),
            socket_path: socket_path.into(),
        }
    }

    /// Resolve the configuration from the process environment.
    ///
    /// `home_override` comes from `--home` (which clap already fills from
    /// `TRACECTL_HOME`).
    pub fn resolve(home_override: Option<&Path>) -> Result<Self> {
        let home = match home_override {
            Some(path) => path.to_path_buf(),
            None => dirs::home_dir().ok_or_else(|| {
                TracectlError::Other(anyhow::anyhow!(
                    "Cannot determine home directory; set {HOME_ENV}"
                ))
            })?,
        };

        let socket_path = match std::env::var_os(SOCKET_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => default_socket_path(&home, is_root()),
        };

        tracing::debug!(
            home = %home.display(),
            socket = %socket_path.display(),
            "Resolved client configuration"
        );

        Ok(Self { home, socket_path })
    }

    /// Home directory.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Path of the rc file.
    pub fn rc_path(&self) -> PathBuf {
        self.home.join(RC_FILE_NAME)
    }

    /// Path of the session daemon socket.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

/// Socket of the system-wide daemon for root, of the per-user daemon otherwise.
pub fn default_socket_path(home: &Path, root: bool) -> PathBuf {
    if root {
        Path::new(SYSTEM_RUNDIR).join(SOCKET_FILE_NAME)
    } else {
        home.join(".tracectl").join(SOCKET_FILE_NAME)
    }
}

#[cfg(unix)]
fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
fn is_root() -> bool {
    false
}
