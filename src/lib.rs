//! A deterministic binary encoding for structured values.
//!
//! # Features
//!
//! ### Encoding
//!
//! - Canonical: every value has exactly one encoding, map entries are
//!   always written in key order
//! - Compact: integers and lengths use LEB128 variable-length integers
//! - Content addressable: [BLAKE3] digests of the canonical encoding
//! - Strings and bytes are always distinct
//!
//! ### Text notation
//!
//! - Human-authored form for configuration files and test fixtures:
//!   `config { retries: 3, tags: ["a", "b"], digest: 0x9f86 }`
//! - Line comments starting with `//` or `#`
//! - Error messages pointing at the offending line and column
//!
//! ### Library
//!
//! - Clear and well documented API
//! - Length-prefixed framing for streams of values
//! - Construct values from any [`serde`] serializable type
//! - Convenient macro for quickly constructing values:
//!   `strata::value!{ name: "strata", retries: 3 }`
//! - Configurable nesting and frame length limits
//!
//! [BLAKE3]: https://github.com/BLAKE3-team/BLAKE3
//!
//! # Getting started
//!
//! Values are usually written by hand in the text notation. The
//! [`compile`] function parses the text and returns its canonical encoding.
//!
//! ```
//! let bytes = strata::compile("{ n: 1 }")?;
//! assert_eq!(strata::to_hex(&bytes), "400120016e1001");
//!
//! let bytes = strata::compile("greeting { text: \"hello\", count: 2 }")?;
//! assert_eq!(bytes.len(), 36);
//! # Ok::<(), strata::ParseError>(())
//! ```
//!
//! The encoding can be decoded back into a [`Value`] using [`decode`].
//!
//! ```
//! # let bytes = strata::compile("greeting { text: \"hello\", count: 2 }")?;
//! let value = strata::decode(&bytes)?;
//! assert_eq!(value, strata::value! { greeting: { text: "hello", count: 2 } });
//! # Ok::<(), strata::Error>(())
//! ```
//!
//! Two values are equal exactly when their encodings are equal, so the
//! [`hash_value`] digest can be used to identify a value.
//!
//! ```
//! let a = strata::parse("{ b: 2, a: 1 }")?;
//! let b = strata::parse("{ a: 1, b: 2 }")?;
//! assert_eq!(strata::hash_value(&a), strata::hash_value(&b));
//! # Ok::<(), strata::ParseError>(())
//! ```
//!
//! # Examples
//!
//! ### Encode structured data
//!
//! Any [`serde`] serializable type can be converted using [`to_value`].
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct User { name: String, age: u8 }
//!
//! let user = User { name: "John Smith".into(), age: 42 };
//!
//! let value = strata::to_value(&user)?;
//! assert_eq!(value.to_string(), r#"{age: 42, name: "John Smith"}"#);
//! # Ok::<(), strata::Error>(())
//! ```
//!
//! ### Limit the nesting depth
//!
//! Decoding untrusted input should be bounded. The default limits allow
//! [`DEFAULT_MAX_DEPTH`] levels of nested lists and maps.
//!
//! ```
//! use strata::{DecodeErrorKind, Limits};
//!
//! let limits = Limits::builder().max_depth(2).build();
//! let bytes = strata::compile("[[[1]]]")?;
//!
//! let err = strata::decode_with(&bytes, &limits).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::NestingTooDeep);
//! assert_eq!(err.offset(), 4);
//! # Ok::<(), strata::Error>(())
//! ```
//!
//! ### Stream values over a connection
//!
//! The [`frame`] module prefixes each encoded value with its length so that
//! many values can be written to one stream.
//!
//! ```
//! use strata::frame::{write_frame, FrameReader};
//!
//! let mut stream = Vec::new();
//! for i in 0..3 {
//!     write_frame(&mut stream, &strata::Value::Int(i))?;
//! }
//!
//! let sum: i64 = FrameReader::new(stream.as_slice())
//!     .map(|value| value.map(|v| v.as_int().unwrap_or(0)))
//!     .sum::<Result<_, _>>()?;
//! assert_eq!(sum, 3);
//! # Ok::<(), strata::FrameError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
mod error;
mod fmt;
pub mod frame;
mod hash;
mod macros;
mod text;
mod types;
pub mod value;

pub use crate::codec::varint;
pub use crate::codec::{decode, decode_with, encode, encode_into, Tag};
pub use crate::error::{
    DecodeError, DecodeErrorKind, Error, FrameError, ParseError, ParseErrorKind, Result,
};
pub use crate::frame::{encode_frame, write_frame, FrameDecoder, FrameReader};
pub use crate::hash::{hash_bytes, hash_value, to_hex, Digest, DIGEST_LEN};
pub use crate::text::{parse, parse_with};
pub use crate::types::limits::{Limits, LimitsBuilder, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FRAME_LEN};
pub use crate::types::span::Span;
#[cfg(feature = "serde")]
pub use crate::value::to_value;
pub use crate::value::Value;

/// Parse text notation and return the canonical encoding of the value.
///
/// This is the same as calling [`parse`] followed by [`encode`].
#[inline]
pub fn compile(source: &str) -> std::result::Result<Vec<u8>, ParseError> {
    parse(source).map(|value| encode(&value))
}
