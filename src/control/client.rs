//! Client for the session daemon's Unix socket.
//!
//! One request per connection, newline-delimited JSON both ways:
//!
//! ```json
//! // Request
//! {"command":"regenerate-metadata","session_name":"auto-20260101"}
//! // Response
//! {"status":0}
//! ```
//!
//! Transport failures never surface as errors. They are folded into daemon
//! status codes so callers handle a single failure channel:
//! - socket missing or connection refused: [`ErrorCode::NoSessiond`]
//! - unreadable or malformed reply: [`ErrorCode::Protocol`]
//!
//! On non-Unix platforms every call reports [`ErrorCode::NoSessiond`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ErrorCode, TraceControl};

/// A request sent to the session daemon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRequest {
    /// Daemon command name (e.g. `"regenerate-metadata"`).
    pub command: String,
    /// Session the command applies to.
    pub session_name: String,
}

/// A reply from the session daemon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    /// `0` on success, a negated [`ErrorCode`] otherwise.
    pub status: i32,
}

/// Session daemon client bound to a socket path.
#[derive(Debug, Clone)]
pub struct SessiondClient {
    socket_path: PathBuf,
}

impl SessiondClient {
    /// Create a client for the daemon listening at `socket_path`.
    pub fn new(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// Socket the client connects to.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Send a request and return the daemon's status.
    pub fn send(&self, request: &ControlRequest) -> i32 {
        tracing::debug!(
            command = %request.command,
            session = %request.session_name,
            socket = %self.socket_path.display(),
            "Sending request to session daemon"
        );

        match self.exchange(request) {
            Ok(Some(response)) => response.status,
            Ok(None) => ErrorCode::NoSessiond.as_status(),
            Err(e) => {
                tracing::debug!("Session daemon exchange failed: {e:#}");
                ErrorCode::Protocol.as_status()
            }
        }
    }

    /// Returns `Ok(None)` when the daemon cannot be reached at all.
    #[cfg(unix)]
    fn exchange(&self, request: &ControlRequest) -> anyhow::Result<Option<ControlResponse>> {
        use anyhow::Context;
        use std::io::{BufRead, BufReader, Write};
        use std::os::unix::net::UnixStream;

        let stream = match UnixStream::connect(&self.socket_path) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("Cannot connect to session daemon: {e}");
                return Ok(None);
            }
        };

        let request_line = serde_json::to_string(request)?;
        {
            let mut writer = std::io::BufWriter::new(&stream);
            writer.write_all(request_line.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush().context("Failed to send request")?;
        }

        let mut reader = BufReader::new(&stream);
        let mut response_line = String::new();
        let read = reader
            .read_line(&mut response_line)
            .context("Failed to read reply")?;
        if read == 0 {
            anyhow::bail!("Session daemon closed the connection without replying");
        }

        let response = serde_json::from_str(response_line.trim())
            .with_context(|| format!("Malformed reply: {}", response_line.trim()))?;
        Ok(Some(response))
    }

    #[cfg(not(unix))]
    fn exchange(&self, _request: &ControlRequest) -> anyhow::Result<Option<ControlResponse>> {
        Ok(None)
    }
}

impl TraceControl for SessiondClient {
    fn regenerate_metadata(&self, session_name: &str) -> i32 {
        self.send(&ControlRequest {
            command: "regenerate-metadata".to_string(),
            session_name: session_name.to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::os::unix::net::UnixListener;
    use std::thread;
    use tempfile::TempDir;

    /// Serve exactly one connection, replying with `reply`, and hand back
    /// the request line the client sent.
    fn serve_once(listener: UnixListener, reply: &'static str) -> thread::JoinHandle<String> {
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(&stream);
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let mut writer = &stream;
            writer.write_all(reply.as_bytes()).unwrap();
            line
        })
    }

    #[test]
    fn missing_socket_reports_no_sessiond() {
        let temp = TempDir::new().unwrap();
        let client = SessiondClient::new(temp.path().join("absent.sock"));

        assert_eq!(
            client.regenerate_metadata("s1"),
            ErrorCode::NoSessiond.as_status()
        );
    }

    #[test]
    fn success_status_is_returned() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sessiond.sock");
        let handle = serve_once(UnixListener::bind(&path).unwrap(), "{\"status\":0}\n");

        let client = SessiondClient::new(&path);
        assert_eq!(client.regenerate_metadata("s1"), 0);

        let sent: ControlRequest = serde_json::from_str(handle.join().unwrap().trim()).unwrap();
        assert_eq!(sent.command, "regenerate-metadata");
        assert_eq!(sent.session_name, "s1");
    }

    #[test]
    fn failure_status_is_returned_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sessiond.sock");
        let handle = serve_once(UnixListener::bind(&path).unwrap(), "{\"status\":-23}\n");

        let client = SessiondClient::new(&path);
        assert_eq!(client.regenerate_metadata("gone"), -23);
        handle.join().unwrap();
    }

    #[test]
    fn malformed_reply_reports_protocol_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sessiond.sock");
        let handle = serve_once(UnixListener::bind(&path).unwrap(), "not json\n");

        let client = SessiondClient::new(&path);
        assert_eq!(
            client.regenerate_metadata("s1"),
            ErrorCode::Protocol.as_status()
        );
        handle.join().unwrap();
    }

    #[test]
    fn closed_connection_reports_protocol_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sessiond.sock");
        let handle = serve_once(UnixListener::bind(&path).unwrap(), "");

        let client = SessiondClient::new(&path);
        assert_eq!(
            client.regenerate_metadata("s1"),
            ErrorCode::Protocol.as_status()
        );
        handle.join().unwrap();
    }

    #[test]
    fn socket_path_accessor() {
        let client = SessiondClient::new("/run/sessiond.sock");
        assert_eq!(client.socket_path(), Path::new("/run/sessiond.sock"));
    }
}
