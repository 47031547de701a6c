//! UTF-16 (big-endian) transcoding.

use super::error::CodecError;
use super::{ByteResult, CodePointResult};
use crate::core::Sequence;
use tracing::trace;

fn is_bmp_code_point(value: u32) -> bool {
    matches!(value, 0x0000..=0xd7ff | 0xe000..=0xffff)
}

fn is_high_surrogate(value: u32) -> bool {
    (0xd800..=0xdbff).contains(&value)
}

fn is_low_surrogate(value: u32) -> bool {
    (0xdc00..=0xdfff).contains(&value)
}

fn code_unit(high: u8, low: u8) -> u32 {
    (u32::from(high) << 8) | u32::from(low)
}

/// Encode one code point as two or four big-endian UTF-16 bytes.
pub fn encode_code_point(code_point: u32) -> Vec<ByteResult> {
    if is_bmp_code_point(code_point) {
        return vec![Ok((code_point >> 8) as u8), Ok((code_point & 0xff) as u8)];
    }
    if (0x1_0000..=0x10_ffff).contains(&code_point) {
        let offset = code_point - 0x1_0000;
        let high = (offset >> 10) + 0xd800;
        let low = (offset & 0x3ff) + 0xdc00;
        return vec![
            Ok((high >> 8) as u8),
            Ok((high & 0xff) as u8),
            Ok((low >> 8) as u8),
            Ok((low & 0xff) as u8),
        ];
    }
    vec![Err(CodecError::InvalidCodePoint { code_point })]
}

/// Encode a sequence of code points, lazily.
pub fn encode(code_points: &Sequence<u32>) -> Sequence<ByteResult> {
    code_points.flat_map(|code_point| Sequence::from_vec(encode_code_point(code_point)))
}

fn decode_byte(mut pending: Vec<u8>, byte: u8) -> (Option<CodePointResult>, Vec<u8>) {
    match pending.len() {
        0 | 2 => {
            pending.push(byte);
            return (None, pending);
        }
        1 => {
            let unit = code_unit(pending[0], byte);
            if is_bmp_code_point(unit) {
                return (Some(Ok(unit)), Vec::new());
            }
            if is_high_surrogate(unit) {
                pending.push(byte);
                return (None, pending);
            }
        }
        _ => {
            let low = code_unit(pending[2], byte);
            if is_low_surrogate(low) {
                let high = code_unit(pending[0], pending[1]) - 0xd800;
                let code_point = (high << 10) + (low - 0xdc00) + 0x1_0000;
                return (Some(Ok(code_point)), Vec::new());
            }
        }
    }
    pending.push(byte);
    trace!(bytes = ?pending, "rejected utf-16 sequence");
    (
        Some(Err(CodecError::InvalidSequence { bytes: pending })),
        Vec::new(),
    )
}

fn decode_step(pending: Vec<u8>, input: Option<u8>) -> (Option<CodePointResult>, Vec<u8>) {
    match input {
        Some(byte) => decode_byte(pending, byte),
        None if pending.is_empty() => (None, pending),
        None => {
            trace!(bytes = ?pending, "utf-16 input ended mid-character");
            (
                Some(Err(CodecError::UnexpectedEnd { bytes: pending })),
                Vec::new(),
            )
        }
    }
}

/// Decode big-endian UTF-16 bytes into code points, lazily.
pub fn decode(bytes: &Sequence<u8>) -> Sequence<CodePointResult> {
    bytes.terminated().state_scan(Vec::new(), decode_step)
}
