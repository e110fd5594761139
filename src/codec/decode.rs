use std::str;

use crate::codec::varint::{decode_sleb128, decode_uleb128};
use crate::codec::Tag;
use crate::error::{DecodeError, DecodeErrorKind};
use crate::types::limits::Limits;
use crate::value::{List, Map};
use crate::Value;

/// Decode a single value from binary input using the default [`Limits`].
///
/// The input must contain exactly one value. Non-canonical input, such as
/// unsorted map keys or padded varints, is accepted. Repeated map keys keep
/// the last value.
///
/// # Examples
///
/// ```
/// use strata::{DecodeErrorKind, Value};
///
/// assert_eq!(strata::decode(&[0x10, 0x7f])?, Value::Int(-1));
///
/// let err = strata::decode(&[0x00, 0x00]).unwrap_err();
/// assert_eq!(err.kind(), DecodeErrorKind::TrailingBytes);
/// assert_eq!(err.offset(), 1);
/// # Ok::<(), strata::DecodeError>(())
/// ```
pub fn decode(input: &[u8]) -> Result<Value, DecodeError> {
    decode_with(input, &Limits::default())
}

/// Decode a single value from binary input using the given [`Limits`].
pub fn decode_with(input: &[u8], limits: &Limits) -> Result<Value, DecodeError> {
    let mut decoder = Decoder {
        input,
        cursor: 0,
        max_depth: limits.max_depth,
    };
    let value = decoder.decode_value(0)?;
    if decoder.cursor != input.len() {
        return Err(DecodeError::new(
            DecodeErrorKind::TrailingBytes,
            decoder.cursor,
        ));
    }
    log::trace!("decoded {} value from {} bytes", value.human(), input.len());
    Ok(value)
}

struct Decoder<'a> {
    input: &'a [u8],
    cursor: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    /// Decode the value starting at the cursor. `depth` is the number of
    /// enclosing lists and maps.
    fn decode_value(&mut self, depth: usize) -> Result<Value, DecodeError> {
        let at = self.cursor;
        let byte = *self
            .input
            .get(at)
            .ok_or_else(|| DecodeError::new(DecodeErrorKind::UnexpectedEof, at))?;
        let tag = Tag::from_u8(byte)
            .ok_or_else(|| DecodeError::new(DecodeErrorKind::InvalidTag(byte), at))?;
        self.cursor += 1;

        let value = match tag {
            Tag::Null => Value::Null,
            Tag::False => Value::Bool(false),
            Tag::True => Value::Bool(true),
            Tag::Int => {
                let (n, next) = decode_sleb128(self.input, self.cursor)
                    .map_err(|_| DecodeError::new(DecodeErrorKind::InvalidVarint, at))?;
                self.cursor = next;
                Value::Int(n)
            }
            Tag::String => Value::String(self.read_string(at)?),
            Tag::Bytes => Value::Bytes(self.read_payload(at)?.to_vec()),
            Tag::List => {
                self.enter(depth, at)?;
                let count = self.read_len(at)?;
                let mut list = List::with_capacity(count.min(self.remaining()));
                for _ in 0..count {
                    list.push(self.decode_value(depth + 1)?);
                }
                Value::List(list)
            }
            Tag::Map => {
                self.enter(depth, at)?;
                let count = self.read_len(at)?;
                let mut map = Map::new();
                for _ in 0..count {
                    let key = self.decode_key()?;
                    let value = self.decode_value(depth + 1)?;
                    map.insert(key, value);
                }
                Value::Map(map)
            }
        };
        Ok(value)
    }

    /// Map keys must be strings, any other tag is reported at the key.
    fn decode_key(&mut self) -> Result<String, DecodeError> {
        let at = self.cursor;
        match self.input.get(at) {
            None => Err(DecodeError::new(DecodeErrorKind::UnexpectedEof, at)),
            Some(&byte) if byte != u8::from(Tag::String) => Err(DecodeError::new(
                DecodeErrorKind::InvalidTag(byte),
                at,
            )),
            Some(_) => {
                self.cursor += 1;
                self.read_string(at)
            }
        }
    }

    fn enter(&self, depth: usize, at: usize) -> Result<(), DecodeError> {
        if depth >= self.max_depth {
            return Err(DecodeError::new(DecodeErrorKind::NestingTooDeep, at));
        }
        Ok(())
    }

    /// Read a length or count belonging to the tag at `at`.
    fn read_len(&mut self, at: usize) -> Result<usize, DecodeError> {
        let (len, next) = decode_uleb128(self.input, self.cursor)
            .map_err(|_| DecodeError::new(DecodeErrorKind::InvalidVarint, at))?;
        self.cursor = next;
        usize::try_from(len).map_err(|_| DecodeError::new(DecodeErrorKind::UnexpectedEof, next))
    }

    /// Read a length prefixed payload belonging to the tag at `at`.
    fn read_payload(&mut self, at: usize) -> Result<&'a [u8], DecodeError> {
        let len = self.read_len(at)?;
        let start = self.cursor;
        if len > self.remaining() {
            return Err(DecodeError::new(DecodeErrorKind::UnexpectedEof, start));
        }
        self.cursor += len;
        Ok(&self.input[start..self.cursor])
    }

    fn read_string(&mut self, at: usize) -> Result<String, DecodeError> {
        let payload = self.read_payload(at)?;
        let start = self.cursor - payload.len();
        str::from_utf8(payload)
            .map(str::to_owned)
            .map_err(|_| DecodeError::new(DecodeErrorKind::InvalidUtf8, start))
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.cursor
    }
}
