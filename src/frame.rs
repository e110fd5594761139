//! Length-prefixed framing for streams of encoded values.
//!
//! Each frame is a 4-byte big-endian payload length followed by the payload,
//! which is exactly one encoded value. Zero length frames are invalid and
//! payloads may not exceed [`Limits::max_frame_len`]. A stream ends cleanly
//! only on a frame boundary.
//!
//! # Examples
//!
//! ```
//! use strata::frame::{write_frame, FrameReader};
//!
//! let mut stream = Vec::new();
//! write_frame(&mut stream, &strata::value! { seq: 1 })?;
//! write_frame(&mut stream, &strata::value! { seq: 2 })?;
//!
//! let values = FrameReader::new(stream.as_slice()).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(values, [strata::value! { seq: 1 }, strata::value! { seq: 2 }]);
//! # Ok::<(), strata::FrameError>(())
//! ```

use std::io::{self, Read, Write};
use std::iter::FusedIterator;

use crate::error::FrameError;
use crate::types::limits::Limits;
use crate::{decode_with, encode, Value};

/// The media type for frame streams.
pub const CONTENT_TYPE: &str = "application/strata";

/// The length of the frame header in bytes.
pub const HEADER_LEN: usize = 4;

const READ_CHUNK_LEN: usize = 8 * 1024;

/// Append a frame containing `payload` to `out`.
///
/// Fails if the payload is empty or longer than the default maximum frame
/// length.
pub fn encode_frame(payload: &[u8], out: &mut Vec<u8>) -> Result<(), FrameError> {
    let header = header(payload.len(), &Limits::default())?;
    out.reserve(HEADER_LEN + payload.len());
    out.extend_from_slice(&header);
    out.extend_from_slice(payload);
    Ok(())
}

/// Encode a value and write it to `writer` as a single frame.
pub fn write_frame<W>(mut writer: W, value: &Value) -> Result<(), FrameError>
where
    W: Write,
{
    let payload = encode(value);
    writer.write_all(&header(payload.len(), &Limits::default())?)?;
    writer.write_all(&payload)?;
    log::debug!("wrote {}-byte frame", payload.len());
    Ok(())
}

fn header(len: usize, limits: &Limits) -> Result<[u8; HEADER_LEN], FrameError> {
    check_len(len, limits)?;
    // `check_len` bounds the length by a maximum that fits in 32 bits.
    let len = u32::try_from(len).map_err(|_| FrameError::TooLarge {
        len,
        max: limits.max_frame_len,
    })?;
    Ok(len.to_be_bytes())
}

fn check_len(len: usize, limits: &Limits) -> Result<(), FrameError> {
    if len == 0 {
        return Err(FrameError::ZeroLength);
    }
    if len > limits.max_frame_len {
        return Err(FrameError::TooLarge {
            len,
            max: limits.max_frame_len,
        });
    }
    Ok(())
}

/// Incrementally splits a byte stream into frames.
///
/// Bytes are fed in arbitrary chunks and complete frames are taken out as
/// they become available. A frame header is validated as soon as its four
/// bytes arrive.
///
/// # Examples
///
/// ```
/// use strata::frame::{encode_frame, FrameDecoder};
///
/// let mut stream = Vec::new();
/// encode_frame(&strata::encode(&strata::Value::Int(7)), &mut stream)?;
///
/// let mut decoder = FrameDecoder::new();
/// decoder.feed(&stream[..3]);
/// assert_eq!(decoder.next_value()?, None);
/// decoder.feed(&stream[3..]);
/// assert_eq!(decoder.next_value()?, Some(strata::Value::Int(7)));
/// decoder.finish()?;
/// # Ok::<(), strata::FrameError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FrameDecoder {
    buf: Vec<u8>,
    /// The start of the unconsumed bytes in `buf`.
    pos: usize,
    limits: Limits,
}

impl FrameDecoder {
    /// Construct a new decoder using the default [`Limits`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new decoder using the given [`Limits`].
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            buf: Vec::new(),
            pos: 0,
            limits,
        }
    }

    /// Append bytes received from the stream.
    pub fn feed(&mut self, chunk: &[u8]) {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
        self.buf.extend_from_slice(chunk);
    }

    /// The number of bytes received but not yet taken as frames.
    pub fn buffered(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next complete frame payload, if there is one.
    pub fn next_payload(&mut self) -> Result<Option<Vec<u8>>, FrameError> {
        let pending = &self.buf[self.pos..];
        let header = match pending.get(..HEADER_LEN) {
            Some(header) => header,
            None => return Ok(None),
        };
        let len = u32::from_be_bytes([header[0], header[1], header[2], header[3]]);
        let len = usize::try_from(len).map_err(|_| FrameError::TooLarge {
            len: usize::MAX,
            max: self.limits.max_frame_len,
        })?;
        check_len(len, &self.limits)?;

        let end = HEADER_LEN + len;
        let payload = match pending.get(HEADER_LEN..end) {
            Some(payload) => payload.to_vec(),
            None => return Ok(None),
        };
        self.pos += end;
        log::debug!("extracted {len}-byte frame");
        Ok(Some(payload))
    }

    /// Take and decode the next complete frame, if there is one.
    pub fn next_value(&mut self) -> Result<Option<Value>, FrameError> {
        match self.next_payload()? {
            Some(payload) => Ok(Some(decode_with(&payload, &self.limits)?)),
            None => Ok(None),
        }
    }

    /// Signal the end of the stream.
    ///
    /// Fails if a partial frame is still buffered.
    pub fn finish(&self) -> Result<(), FrameError> {
        match self.buffered() {
            0 => Ok(()),
            buffered => Err(FrameError::Truncated { buffered }),
        }
    }
}

/// An iterator over the values in a frame stream read from `R`.
///
/// The iterator yields each decoded value in order. It stops after the
/// stream ends on a frame boundary, or after yielding the first error.
#[derive(Debug)]
pub struct FrameReader<R> {
    reader: R,
    decoder: FrameDecoder,
    done: bool,
}

impl<R> FrameReader<R>
where
    R: Read,
{
    /// Construct a new frame reader using the default [`Limits`].
    pub fn new(reader: R) -> Self {
        Self::with_limits(reader, Limits::default())
    }

    /// Construct a new frame reader using the given [`Limits`].
    pub fn with_limits(reader: R, limits: Limits) -> Self {
        Self {
            reader,
            decoder: FrameDecoder::with_limits(limits),
            done: false,
        }
    }

    /// Unwraps this reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_value(&mut self) -> Result<Option<Value>, FrameError> {
        let mut chunk = [0; READ_CHUNK_LEN];
        loop {
            if let Some(value) = self.decoder.next_value()? {
                return Ok(Some(value));
            }
            let n = match self.reader.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };
            if n == 0 {
                self.decoder.finish()?;
                log::debug!("frame stream ended");
                return Ok(None);
            }
            self.decoder.feed(&chunk[..n]);
        }
    }
}

impl<R> Iterator for FrameReader<R>
where
    R: Read,
{
    type Item = Result<Value, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = self.read_value().transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

impl<R> FusedIterator for FrameReader<R> where R: Read {}
