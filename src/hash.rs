//! Content hashing.
//!
//! A value's identity is the BLAKE3 digest of its canonical encoding, so
//! equal values always share a digest.

use std::fmt;
use std::str::FromStr;

use crate::{encode, Value};

/// The length of a [`Digest`] in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte BLAKE3 digest.
///
/// Displays as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The raw digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    #[inline]
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    #[inline]
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = hex::FromHexError;

    /// Parse a digest from 64 hex characters of either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; DIGEST_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Hash raw bytes.
///
/// # Examples
///
/// ```
/// let digest = strata::hash_bytes(b"");
/// assert_eq!(
///     digest.to_hex(),
///     "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
/// );
/// ```
pub fn hash_bytes(bytes: &[u8]) -> Digest {
    Digest(*blake3::hash(bytes).as_bytes())
}

/// Hash the canonical encoding of a value.
pub fn hash_value(value: &Value) -> Digest {
    hash_bytes(&encode(value))
}

/// Render bytes as lowercase hex.
#[inline]
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
