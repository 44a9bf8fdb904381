//! Error types for codec operations

use std::fmt::Display;
use thiserror::Error;

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;

/// Error type for codec operations
///
/// Every failure is returned to the immediate caller. Codecs never retry and
/// never fall back to another representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The value (or one of its members) cannot be represented in the wire format
    #[error("encoding error: {0}")]
    Encoding(String),

    /// The payload is malformed or does not structurally match the requested type
    #[error("decoding error: {0}")]
    Decoding(String),

    /// The payload names a different type than the one the caller asked for
    ///
    /// Only reported when the codec embeds type names in its payloads.
    #[error("type mismatch: payload carries `{actual}`, caller expected `{expected}`")]
    TypeMismatch { expected: String, actual: String },
}

impl CodecError {
    /// Build an [`CodecError::Encoding`] from any displayable cause
    pub fn encoding(cause: impl Display) -> Self {
        CodecError::Encoding(cause.to_string())
    }

    /// Build a [`CodecError::Decoding`] from any displayable cause
    pub fn decoding(cause: impl Display) -> Self {
        CodecError::Decoding(cause.to_string())
    }

    /// True for failures raised while producing a payload
    pub fn is_encoding(&self) -> bool {
        matches!(self, CodecError::Encoding(_))
    }

    /// True for failures raised while consuming a payload
    ///
    /// A type mismatch counts as a decoding failure.
    pub fn is_decoding(&self) -> bool {
        matches!(
            self,
            CodecError::Decoding(_) | CodecError::TypeMismatch { .. }
        )
    }
}
