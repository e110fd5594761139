use std::cmp::max;
use std::fmt;
use std::io;

#[cfg(feature = "unicode")]
use unicode_width::UnicodeWidthStr;

use crate::types::span::Span;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error that can occur in this crate.
///
/// Each layer reports its own error type. This enum wraps them so that
/// callers mixing parsing, decoding, framing and I/O can use `?` throughout.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Text notation could not be parsed.
    Parse(ParseError),
    /// Binary input could not be decoded.
    Decode(DecodeError),
    /// A frame stream was malformed.
    Frame(FrameError),
    /// An I/O error.
    Io(io::Error),
    /// A value could not be converted, for example during serialization.
    Custom(String),
}

////////////////////////////////////////////////////////////////////////////////
// Decode errors
////////////////////////////////////////////////////////////////////////////////

/// An error that occurred while decoding binary input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    offset: usize,
}

/// The kind of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// A tag byte that is not defined, or a map key that is not a string.
    InvalidTag(u8),
    /// The input ended before the value was complete.
    UnexpectedEof,
    /// A varint was truncated or does not fit in 64 bits.
    InvalidVarint,
    /// A string payload is not valid UTF-8.
    InvalidUtf8,
    /// Input remained after the top-level value.
    TrailingBytes,
    /// Lists and maps are nested deeper than the configured limit.
    NestingTooDeep,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, offset: usize) -> Self {
        Self { kind, offset }
    }

    /// The kind of error.
    #[inline]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// The byte offset at which the error was detected.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl DecodeErrorKind {
    /// The stable name of this kind, as used in conformance vectors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidTag(_) => "InvalidTag",
            Self::UnexpectedEof => "UnexpectedEOF",
            Self::InvalidVarint => "InvalidVarint",
            Self::InvalidUtf8 => "InvalidUTF8",
            Self::TrailingBytes => "TrailingBytes",
            Self::NestingTooDeep => "NestingTooDeep",
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTag(tag) => write!(f, "invalid tag 0x{tag:02x}"),
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
            Self::InvalidVarint => f.write_str("invalid varint"),
            Self::InvalidUtf8 => f.write_str("invalid UTF-8 in string"),
            Self::TrailingBytes => f.write_str("trailing bytes after value"),
            Self::NestingTooDeep => f.write_str("nesting exceeds the maximum depth"),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

impl std::error::Error for DecodeError {}

////////////////////////////////////////////////////////////////////////////////
// Parse errors
////////////////////////////////////////////////////////////////////////////////

/// An error that occurred while lexing or parsing text notation.
///
/// The alternate display format (`{:#}`) renders the offending source line
/// with the error underlined.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseError {
    kind: ParseErrorKind,
    span: Span,
    /// The source line containing the error.
    code: String,
    /// The display width of the code before the offending token.
    indent: usize,
    /// The display width of the offending token.
    width: usize,
}

/// The kind of a [`ParseError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// A token or character appeared where something else was required.
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },
    /// A `0x` literal without hex digits or with an odd number of them.
    MalformedBytesLiteral,
    /// An unterminated string, an invalid escape or a raw non-ASCII
    /// character inside a string.
    MalformedStringLiteral,
    /// An integer literal that does not fit in 64 bits.
    IntegerOutOfRange,
    /// Lists and maps are nested deeper than the configured limit.
    NestingTooDeep,
}

impl ParseError {
    /// Construct a new error at `span` covering `len` bytes of `source`.
    pub(crate) fn new(kind: ParseErrorKind, source: &str, span: Span, len: usize) -> Self {
        let start = source[..span.offset].rfind('\n').map_or(0, |i| i + 1);
        let end = source[span.offset..]
            .find('\n')
            .map_or(source.len(), |i| span.offset + i);
        let code = source[start..end].trim_end_matches('\r');
        let token = source
            .get(span.offset..span.offset + len)
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default();
        Self {
            kind,
            span,
            code: code.to_owned(),
            indent: display_width(&source[start..span.offset]),
            width: max(1, display_width(token)),
        }
    }

    /// The kind of error.
    #[inline]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The location of the error.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            Self::MalformedBytesLiteral => f.write_str("malformed bytes literal"),
            Self::MalformedStringLiteral => f.write_str("malformed string literal"),
            Self::IntegerOutOfRange => f.write_str("integer out of range"),
            Self::NestingTooDeep => f.write_str("nesting exceeds the maximum depth"),
        }
    }
}

impl fmt::Debug for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_pretty(f)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            self.fmt_pretty(f)
        } else {
            write!(
                f,
                "{} at line {}, column {}",
                self.kind, self.span.line, self.span.column
            )
        }
    }
}

impl std::error::Error for ParseError {}

impl ParseError {
    fn fmt_pretty(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.span.line.to_string();
        let pad = display_width(&num);
        let underline = "^".repeat(self.width);
        write!(
            f,
            "\n \
            {0:pad$} |\n \
            {num:>} | {code}\n \
            {0:pad$} | {underline:>width$} {msg}\n",
            "",
            pad = pad,
            num = num,
            code = self.code,
            underline = underline,
            width = self.indent + self.width,
            msg = self.kind,
        )
    }
}

#[cfg(feature = "unicode")]
fn display_width(s: &str) -> usize {
    s.width()
}

#[cfg(not(feature = "unicode"))]
fn display_width(s: &str) -> usize {
    s.chars().count()
}

////////////////////////////////////////////////////////////////////////////////
// Frame errors
////////////////////////////////////////////////////////////////////////////////

/// An error that occurred while reading or writing frames.
#[derive(Debug)]
#[non_exhaustive]
pub enum FrameError {
    /// A frame declared a zero length payload.
    ZeroLength,
    /// A frame payload exceeds the configured maximum.
    TooLarge { len: usize, max: usize },
    /// The stream ended part way through a frame.
    Truncated { buffered: usize },
    /// A complete frame payload failed to decode.
    Decode(DecodeError),
    /// The underlying reader or writer failed.
    Io(io::Error),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => f.write_str("frame has zero length"),
            Self::TooLarge { len, max } => {
                write!(f, "frame length {len} exceeds the maximum of {max}")
            }
            Self::Truncated { buffered } => {
                write!(f, "stream ended inside a frame with {buffered} bytes buffered")
            }
            Self::Decode(_) => f.write_str("failed to decode frame payload"),
            Self::Io(_) => f.write_str("frame I/O failed"),
        }
    }
}

impl std::error::Error for FrameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for FrameError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<io::Error> for FrameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Error
////////////////////////////////////////////////////////////////////////////////

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => fmt::Display::fmt(err, f),
            Self::Decode(err) => fmt::Display::fmt(err, f),
            Self::Frame(err) => fmt::Display::fmt(err, f),
            Self::Io(err) => fmt::Display::fmt(err, f),
            Self::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Frame(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Custom(_) => None,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::Custom(msg.to_string())
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<FrameError> for Error {
    fn from(err: FrameError) -> Self {
        Self::Frame(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
