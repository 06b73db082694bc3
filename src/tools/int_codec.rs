//! Conversion between i32 values and the 4 byte big-endian fields used by both stream formats.

use log::error;

use crate::error::{LzhError, Result};

/// Width in bytes of every integer field on the wire.
pub const INT_WIDTH: usize = 4;

/// Encode an i32 as 4 big-endian, two's complement bytes.
pub fn encode_i32(n: i32) -> [u8; INT_WIDTH] {
    [
        (n >> 24) as u8,
        (n >> 16) as u8,
        (n >> 8) as u8,
        n as u8,
    ]
}

/// Decode the first 4 bytes of `bytes` as a big-endian i32. Returns None if fewer than 4 bytes
/// are supplied.
pub fn decode_i32(bytes: &[u8]) -> Option<i32> {
    if bytes.len() < INT_WIDTH {
        return None;
    }
    // Each byte is masked so a high bit never sign extends into the accumulator.
    let value = bytes[..INT_WIDTH]
        .iter()
        .fold(0_u32, |acc, &b| (acc << 8) | (b as u32 & 0xff));
    Some(value as i32)
}

/// Append an encoded i32 to the output.
pub fn push_i32(out: &mut Vec<u8>, n: i32) {
    out.extend_from_slice(&encode_i32(n));
}

/// Read an i32 at `*pos`, advancing the cursor. `context` names the field for error reporting.
pub fn read_i32(data: &[u8], pos: &mut usize, context: &'static str) -> Result<i32> {
    match data.get(*pos..).and_then(decode_i32) {
        Some(n) => {
            *pos += INT_WIDTH;
            Ok(n)
        }
        None => {
            error!("Truncated {} at byte {}", context, *pos);
            Err(LzhError::malformed(context, *pos))
        }
    }
}
