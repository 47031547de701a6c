//! UTF-8 transcoding.

use super::error::CodecError;
use super::{ByteResult, CodePointResult};
use crate::core::Sequence;
use tracing::trace;

/// Encode one code point as one to four UTF-8 bytes.
pub fn encode_code_point(code_point: u32) -> Vec<ByteResult> {
    let bytes = match code_point {
        0x0000..=0x007f => vec![code_point as u8],
        0x0080..=0x07ff => vec![
            (code_point >> 6 | 0xc0) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ],
        0x0800..=0xffff => vec![
            (code_point >> 12 | 0xe0) as u8,
            (code_point >> 6 & 0x3f | 0x80) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ],
        0x1_0000..=0x10_ffff => vec![
            (code_point >> 18 | 0xf0) as u8,
            (code_point >> 12 & 0x3f | 0x80) as u8,
            (code_point >> 6 & 0x3f | 0x80) as u8,
            (code_point & 0x3f | 0x80) as u8,
        ],
        _ => return vec![Err(CodecError::InvalidCodePoint { code_point })],
    };
    bytes.into_iter().map(Ok).collect()
}

/// Encode a sequence of code points, lazily.
pub fn encode(code_points: &Sequence<u32>) -> Sequence<ByteResult> {
    code_points.flat_map(|code_point| Sequence::from_vec(encode_code_point(code_point)))
}

fn continuation(byte: u8) -> u32 {
    u32::from(byte & 0x3f)
}

fn invalid(mut pending: Vec<u8>, byte: u8) -> (Option<CodePointResult>, Vec<u8>) {
    pending.push(byte);
    trace!(bytes = ?pending, "rejected utf-8 sequence");
    (
        Some(Err(CodecError::InvalidSequence { bytes: pending })),
        Vec::new(),
    )
}

fn decode_byte(mut pending: Vec<u8>, byte: u8) -> (Option<CodePointResult>, Vec<u8>) {
    let Some(&lead) = pending.first() else {
        return match byte {
            0x00..=0x7f => (Some(Ok(u32::from(byte))), pending),
            0xc2..=0xf4 => {
                pending.push(byte);
                (None, pending)
            }
            _ => invalid(pending, byte),
        };
    };
    if !(0x80..=0xbf).contains(&byte) {
        return invalid(pending, byte);
    }
    let code_point = match pending.len() {
        1 if lead < 0xe0 => (u32::from(lead & 0x1f) << 6) | continuation(byte),
        2 if lead < 0xf0 => {
            (u32::from(lead & 0x0f) << 12) | (continuation(pending[1]) << 6) | continuation(byte)
        }
        3 => {
            (u32::from(lead & 0x07) << 18)
                | (continuation(pending[1]) << 12)
                | (continuation(pending[2]) << 6)
                | continuation(byte)
        }
        _ => {
            pending.push(byte);
            return (None, pending);
        }
    };
    (Some(Ok(code_point)), Vec::new())
}

/// One decoder step; `None` input is the end-of-input marker.
fn decode_step(pending: Vec<u8>, input: Option<u8>) -> (Option<CodePointResult>, Vec<u8>) {
    match input {
        Some(byte) => decode_byte(pending, byte),
        None if pending.is_empty() => (None, pending),
        None => {
            trace!(bytes = ?pending, "utf-8 input ended mid-character");
            (
                Some(Err(CodecError::UnexpectedEnd { bytes: pending })),
                Vec::new(),
            )
        }
    }
}

/// Decode UTF-8 bytes into code points, lazily.
///
/// Every malformed or truncated character becomes one error element carrying
/// the offending bytes.
///
/// # Example
///
/// ```rust
/// use lazyseq::codec::{utf8, CodecError};
/// use lazyseq::seq;
///
/// let decoded = utf8::decode(&seq![0xf4, 0x8f, 0xbf, 0xbf]);
/// assert_eq!(decoded.to_vec(), vec![Ok(0x10ffff)]);
///
/// let truncated = utf8::decode(&seq![0xf4, 0x8f, 0xbf]);
/// assert_eq!(
///     truncated.to_vec(),
///     vec![Err(CodecError::UnexpectedEnd { bytes: vec![0xf4, 0x8f, 0xbf] })]
/// );
/// ```
pub fn decode(bytes: &Sequence<u8>) -> Sequence<CodePointResult> {
    bytes.terminated().state_scan(Vec::new(), decode_step)
}
