//! Error types for the message codec.
//!
//! Failures are grouped by where they are detected:
//!
//! - [`InputError`]: absent or degenerate input handed to the codec.
//! - [`ValidationError`]: a message that breaks the size, count or character rules.
//! - [`StructureError`]: an encoded buffer whose header section is corrupt.
//! - [`CodecError`]: top-level enum wrapping all three categories.
//!
//! Every error is returned at the point of detection. The codec never
//! produces a partial message or partial buffer.

use std::io;

use thiserror::Error;

/// Absent or degenerate input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// No message was supplied for encoding.
    #[error("message is absent")]
    NullMessage,

    /// No buffer was supplied for decoding.
    #[error("encoded value is absent")]
    NullData,

    /// The buffer supplied for decoding has zero length.
    #[error("encoded value is empty")]
    EmptyData,
}

/// Violations of the message invariants.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The payload is empty, or decoding consumed every byte as headers.
    #[error("invalid message format: missing payload")]
    MissingPayload,

    /// The payload exceeds the configured maximum size.
    #[error("payload exceeds max size: {size} > {max} bytes")]
    PayloadTooLarge {
        /// Payload length in bytes.
        size: usize,
        /// Maximum allowed payload length.
        max: usize,
    },

    /// The message carries more headers than allowed.
    #[error("too many headers: {count} > {max}")]
    TooManyHeaders {
        /// Number of headers present.
        count: usize,
        /// Maximum allowed header count.
        max: usize,
    },

    /// A header name or value exceeds the configured maximum size.
    #[error("header field exceeds max size: {size} > {max} bytes")]
    HeaderTooLarge {
        /// Byte length of the offending field.
        size: usize,
        /// Maximum allowed field length.
        max: usize,
    },

    /// A header name or value contains a character outside ASCII.
    #[error("non-ASCII character {character:?} in header field {field:?}")]
    NonAsciiCharacter {
        /// The offending header name or value.
        field: String,
        /// First non-ASCII character found.
        character: char,
    },
}

/// Structural corruption found while parsing an encoded buffer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    /// A length prefix or the bytes it announces run past the buffer end.
    #[error("truncated header at offset {offset}: need {needed} bytes, have {available}")]
    TruncatedHeader {
        /// Buffer offset where the read started.
        offset: usize,
        /// Bytes required by the read.
        needed: usize,
        /// Bytes remaining in the buffer.
        available: usize,
    },

    /// The same header name appears twice.
    #[error("duplicate header name: {name}")]
    DuplicateHeaderName {
        /// The repeated name.
        name: String,
    },
}

/// Top-level codec error taxonomy.
///
/// # Examples
///
/// ```
/// use binary_signal::codec::{CodecError, InputError};
///
/// let err = CodecError::from(InputError::EmptyData);
/// assert_eq!(err.error_type(), "input");
/// assert_eq!(err.to_string(), "input error: encoded value is empty");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Absent or degenerate input.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Message invariant violation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Corrupt encoded structure.
    #[error("structure error: {0}")]
    Structure(#[from] StructureError),
}

impl CodecError {
    /// Returns the error category as a string for logging and metrics.
    ///
    /// # Returns
    ///
    /// One of: `"input"`, `"validation"`, or `"structure"`.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::Input(_) => "input",
            Self::Validation(_) => "validation",
            Self::Structure(_) => "structure",
        }
    }

    /// Returns true if the error was caused by a corrupt encoded buffer.
    #[must_use]
    pub fn is_corrupt_data(&self) -> bool { matches!(self, Self::Structure(_)) }
}

impl From<CodecError> for io::Error {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Input(e) => io::Error::new(io::ErrorKind::InvalidInput, e),
            CodecError::Validation(e) => io::Error::new(io::ErrorKind::InvalidInput, e),
            CodecError::Structure(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
