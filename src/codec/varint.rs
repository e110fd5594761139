//! LEB128 variable-length integers.
//!
//! Lengths and counts are written as unsigned LEB128 and integer values as
//! signed LEB128. Both split the number into 7-bit groups, least significant
//! first, with the high bit of each byte set when another byte follows.
//!
//! Decoding accepts at most [`MAX_LEN`] bytes. The final group may only carry
//! the bits that remain in a 64-bit integer.

use std::fmt;

/// The maximum number of bytes in an encoded 64-bit integer.
pub const MAX_LEN: usize = 10;

/// An error that occurred while decoding a varint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarintError {
    /// The input ended before the last byte of the varint.
    UnexpectedEof,
    /// The varint does not fit in 64 bits.
    Overflow,
}

impl fmt::Display for VarintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => f.write_str("varint is truncated"),
            Self::Overflow => f.write_str("varint does not fit in 64 bits"),
        }
    }
}

impl std::error::Error for VarintError {}

/// Append the unsigned LEB128 encoding of `n` to `out`.
#[inline]
pub fn encode_uleb128(mut n: u64, out: &mut Vec<u8>) {
    loop {
        let byte = (n & 0x7f) as u8;
        n >>= 7;
        if n == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Append the signed LEB128 encoding of `n` to `out`.
#[inline]
pub fn encode_sleb128(mut n: i64, out: &mut Vec<u8>) {
    loop {
        let byte = (n & 0x7f) as u8;
        // arithmetic shift, the sign is preserved
        n >>= 7;
        let sign = byte & 0x40 != 0;
        if (n == 0 && !sign) || (n == -1 && sign) {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Decode an unsigned LEB128 integer starting at `offset`.
///
/// Returns the value and the offset just past its last byte.
pub fn decode_uleb128(bytes: &[u8], offset: usize) -> Result<(u64, usize), VarintError> {
    let mut result = 0u64;
    let mut shift = 0u32;
    let mut i = offset;
    loop {
        let byte = *bytes.get(i).ok_or(VarintError::UnexpectedEof)?;
        i += 1;
        let group = u64::from(byte & 0x7f);
        if shift == 63 && (group > 1 || byte & 0x80 != 0) {
            return Err(VarintError::Overflow);
        }
        result |= group << shift;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }
}

/// Decode a signed LEB128 integer starting at `offset`.
///
/// Returns the value and the offset just past its last byte.
pub fn decode_sleb128(bytes: &[u8], offset: usize) -> Result<(i64, usize), VarintError> {
    let mut result = 0i64;
    let mut shift = 0u32;
    let mut i = offset;
    loop {
        let byte = *bytes.get(i).ok_or(VarintError::UnexpectedEof)?;
        i += 1;
        let group = i64::from(byte & 0x7f);
        if shift == 63 {
            // Only the sign bit is left, so the group must be all zeros or
            // all ones.
            if byte & 0x80 != 0 || (group != 0 && group != 0x7f) {
                return Err(VarintError::Overflow);
            }
            return Ok((result | group << 63, i));
        }
        result |= group << shift;
        shift += 7;
        if byte & 0x80 == 0 {
            if byte & 0x40 != 0 {
                result |= -1i64 << shift;
            }
            return Ok((result, i));
        }
    }
}
