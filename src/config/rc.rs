//! The per-user rc file.
//!
//! The rc file remembers the ambient session between invocations:
//!
//! ```text
//! # written by `tracectl create`
//! session=auto-20261019-101500
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Key naming the ambient session.
pub const SESSION_KEY: &str = "session";

/// Parsed `key=value` entries of an rc file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcFile {
    entries: HashMap<String, String>,
}

impl RcFile {
    /// Load the rc file at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(Self::parse(&content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No rc file at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Parse rc content. Later keys win; malformed lines are skipped.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) if !key.trim().is_empty() => {
                    entries.insert(key.trim().to_string(), value.trim().to_string());
                }
                _ => {
                    tracing::warn!("Ignoring malformed rc line {}: {}", line_num + 1, line);
                }
            }
        }

        Self { entries }
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The ambient session name, if one is set and non-empty.
    pub fn session_name(&self) -> Option<&str> {
        self.get(SESSION_KEY).filter(|name| !name.is_empty())
    }
}
