//! Error types for key encoding and API key operations.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or assembling keys.
#[derive(Debug, Error)]
pub enum UuidKeyError {
    /// A caller-supplied argument is unusable (empty prefix, wrong number
    /// of API key parts, etc.)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Key failed structural validation (length, hyphen placement, alphabet)
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Checksum field has the wrong length or contains disallowed characters
    #[error("Invalid checksum format: must be 8 hexadecimal characters")]
    InvalidChecksumFormat,

    /// Supplied checksum differs from the one recomputed from the key material
    #[error("Invalid checksum: expected {expected}, got {got}")]
    ChecksumMismatch { expected: String, got: String },

    /// Key failed validation while extracting its UUID
    #[error("Invalid UUID key")]
    DecodeFailure,
}

/// Result type alias for key operations.
pub type Result<T> = std::result::Result<T, UuidKeyError>;
