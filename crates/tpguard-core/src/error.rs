//! Shared error type across tpguard crates.

use thiserror::Error;

/// Stable error codes (used in logs and metric labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration failed to parse or validate.
    InvalidConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// A collaborator (oracle, zone provider, message sink) could not answer.
    Unavailable,
    /// A collaborator did not answer within its deadline.
    Timeout,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Unavailable => "UNAVAILABLE",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TpGuardError>;

/// Unified error type used by core and engine.
#[derive(Debug, Error)]
pub enum TpGuardError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator timed out after {0}ms")]
    Timeout(u64),
    #[error("internal: {0}")]
    Internal(String),
}

impl TpGuardError {
    /// Map to a stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            TpGuardError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            TpGuardError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            TpGuardError::Unavailable(_) => ErrorCode::Unavailable,
            TpGuardError::Timeout(_) => ErrorCode::Timeout,
            TpGuardError::Internal(_) => ErrorCode::Internal,
        }
    }
}
