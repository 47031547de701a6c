//! Transcoding errors.

use thiserror::Error;

/// Errors produced inline by the encoders and decoders.
///
/// Decoders never stop at an error: each malformed unit becomes one error
/// element and decoding resumes with the next byte.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The value is not a Unicode scalar value the encoding can represent
    #[error("Invalid code point {code_point:#x}")]
    InvalidCodePoint { code_point: u32 },

    /// The bytes do not form a valid encoded character
    #[error("Invalid byte sequence {bytes:02x?}")]
    InvalidSequence { bytes: Vec<u8> },

    /// Input ended in the middle of an encoded character
    #[error("Unexpected end of input after {bytes:02x?}")]
    UnexpectedEnd { bytes: Vec<u8> },
}
