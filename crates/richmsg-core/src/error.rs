//! Shared error type across richmsg crates.
//!
//! Building and rendering messages never fails; errors only come from
//! type-name lookup, deserializing message records, and loading template
//! configuration.

use thiserror::Error;

/// Stable error codes (safe to expose to callers and logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Type name is not one of the registered rich message kinds.
    UnknownType,
    /// Configuration could not be parsed or failed validation.
    InvalidConfig,
    /// Unsupported configuration version.
    UnsupportedVersion,
    /// Configuration source could not be read.
    Io,
    /// Serialized message record is inconsistent with its type tag.
    Malformed,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnknownType => "UNKNOWN_TYPE",
            ErrorCode::InvalidConfig => "INVALID_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Io => "IO",
            ErrorCode::Malformed => "MALFORMED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RichMessageError>;

/// Unified error type used by core and templates.
#[derive(Debug, Error)]
pub enum RichMessageError {
    #[error("unknown message type: {0}")]
    UnknownType(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("io: {0}")]
    Io(String),
    #[error("malformed message record: {0}")]
    Malformed(String),
}

impl RichMessageError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            RichMessageError::UnknownType(_) => ErrorCode::UnknownType,
            RichMessageError::InvalidConfig(_) => ErrorCode::InvalidConfig,
            RichMessageError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            RichMessageError::Io(_) => ErrorCode::Io,
            RichMessageError::Malformed(_) => ErrorCode::Malformed,
        }
    }
}
