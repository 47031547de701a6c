//! Byte-level Unicode transcoders expressed as sequence combinators.
//!
//! Encoders are `flat_map`s from code points to bytes. Decoders are
//! `state_scan`s over [`terminated`](crate::Sequence::terminated) byte
//! input: the pending bytes of a partially decoded character are the scan
//! state, and the end-of-input marker flushes them as an error.
//!
//! # Example
//!
//! ```rust
//! use lazyseq::codec::{self, Encoding};
//!
//! let code_points = codec::code_points("héllo");
//! let bytes: Vec<u8> = Encoding::Utf16
//!     .encode(&code_points)
//!     .iter()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(bytes.len(), 10);
//!
//! let decoded = Encoding::Utf16.validate(&bytes.into_iter().collect());
//! assert!(decoded.is_success());
//! ```

pub mod error;
pub mod utf16;
pub mod utf8;

pub use error::CodecError;

use crate::core::Sequence;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// An encoded byte, or the code point that could not be encoded.
pub type ByteResult = Result<u8, CodecError>;

/// A decoded code point, or the bytes that could not be decoded.
pub type CodePointResult = Result<u32, CodecError>;

/// Supported byte encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Encoding {
    Utf8,
    /// Big-endian UTF-16
    Utf16,
}

impl Encoding {
    pub fn encode(self, code_points: &Sequence<u32>) -> Sequence<ByteResult> {
        match self {
            Self::Utf8 => utf8::encode(code_points),
            Self::Utf16 => utf16::encode(code_points),
        }
    }

    pub fn decode(self, bytes: &Sequence<u8>) -> Sequence<CodePointResult> {
        match self {
            Self::Utf8 => utf8::decode(bytes),
            Self::Utf16 => utf16::decode(bytes),
        }
    }

    /// Decode everything, accumulating ALL errors instead of stopping at the
    /// first one.
    pub fn validate(self, bytes: &Sequence<u8>) -> Validation<Vec<u32>, NonEmptyVec<CodecError>> {
        let checks: Vec<Validation<u32, NonEmptyVec<CodecError>>> = self
            .decode(bytes)
            .iter()
            .map(|decoded| match decoded {
                Ok(code_point) => Validation::success(code_point),
                Err(error) => Validation::fail(error),
            })
            .collect();
        Validation::all_vec(checks)
    }
}

/// The code points of a string, lazily.
pub fn code_points(text: &str) -> Sequence<u32> {
    text.chars().map(u32::from).collect()
}
