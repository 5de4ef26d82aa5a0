//! Session daemon status codes.

/// Status codes reported by the session daemon.
///
/// The daemon reports failures as the negated code, so lookups use the
/// absolute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 10,
    Unknown = 11,
    Undefined = 12,
    NotSupported = 15,
    NoSession = 16,
    NoSessiond = 19,
    SessionNotFound = 23,
    EPerm = 26,
    Protocol = 31,
    LiveSession = 92,
    PerPidBuffers = 93,
}

impl ErrorCode {
    const ALL: [ErrorCode; 11] = [
        Self::Ok,
        Self::Unknown,
        Self::Undefined,
        Self::NotSupported,
        Self::NoSession,
        Self::NoSessiond,
        Self::SessionNotFound,
        Self::EPerm,
        Self::Protocol,
        Self::LiveSession,
        Self::PerPidBuffers,
    ];

    /// Find the code for a raw status, ignoring its sign.
    pub fn from_status(status: i32) -> Option<Self> {
        let abs = status.checked_abs()?;
        Self::ALL.into_iter().find(|code| *code as i32 == abs)
    }

    /// Status the daemon would report for this failure.
    pub fn as_status(self) -> i32 {
        -(self as i32)
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Ok => "Success",
            Self::Unknown => "Unknown error",
            Self::Undefined => "Undefined command",
            Self::NotSupported => "Not supported",
            Self::NoSession => "No session found",
            Self::NoSessiond => "No session daemon is available",
            Self::SessionNotFound => "Session name not found",
            Self::EPerm => "Permission denied",
            Self::Protocol => "Invalid protocol response from session daemon",
            Self::LiveSession => "Operation not supported on a live session",
            Self::PerPidBuffers => "Operation not supported with per-PID buffers",
        }
    }
}

/// Describe a daemon status code.
pub fn describe_status(code: i32) -> &'static str {
    if code == 0 {
        return ErrorCode::Ok.description();
    }
    match ErrorCode::from_status(code) {
        Some(known) => known.description(),
        None => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_and_positive_codes_match() {
        assert_eq!(ErrorCode::from_status(-19), Some(ErrorCode::NoSessiond));
        assert_eq!(ErrorCode::from_status(19), Some(ErrorCode::NoSessiond));
    }

    #[test]
    fn as_status_is_negated() {
        assert_eq!(ErrorCode::NoSessiond.as_status(), -19);
    }

    #[test]
    fn describe_known_code() {
        assert_eq!(
            describe_status(ErrorCode::NoSessiond.as_status()),
            "No session daemon is available"
        );
    }

    #[test]
    fn describe_zero_is_success() {
        assert_eq!(describe_status(0), "Success");
    }

    #[test]
    fn describe_unknown_code_falls_back() {
        assert_eq!(describe_status(-4242), "Unknown error code");
        assert_eq!(describe_status(i32::MIN), "Unknown error code");
    }

    #[test]
    fn every_code_round_trips_through_status() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::from_status(code.as_status()), Some(code));
        }
    }
}
