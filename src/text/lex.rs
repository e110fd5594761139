use crate::error::{ParseError, ParseErrorKind};
use crate::types::span::{Span, Tracker};

/// A lexer that tokenizes text notation so that the parser doesn't have to
/// operate on raw text.
///
/// Literals are decoded as they are lexed, so a malformed literal is
/// reported as soon as the parser looks ahead to it.
pub struct Lexer<'source> {
    /// The source text.
    pub source: &'source str,

    /// A cursor over the source.
    cursor: usize,

    /// Converts token offsets into lines and columns.
    tracker: Tracker<'source>,
}

/// A token together with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'source> {
    pub token: Token<'source>,
    pub span: Span,
    /// The length of the token in bytes.
    pub len: usize,
}

/// The unit yielded by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'source> {
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// The keyword `null`
    Null,
    /// The keyword `true`
    True,
    /// The keyword `false`
    False,
    /// An integer literal, e.g. `-42`
    Int(i64),
    /// A string literal with its escapes resolved, e.g. `"hello\n"`
    String(String),
    /// A bytes literal, e.g. `0xdeadbeef`
    Bytes(Vec<u8>),
    /// A map key, e.g. `retries`
    Ident(&'source str),
    /// The end of the source.
    Eof,
}

impl<'source> Lexer<'source> {
    /// Construct a new lexer.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            cursor: 0,
            tracker: Tracker::new(source),
        }
    }

    /// Returns the next token, skipping whitespace and comments.
    ///
    /// Once the end of the source is reached this keeps returning
    /// [`Token::Eof`].
    pub fn next(&mut self) -> Result<Lexeme<'source>, ParseError> {
        self.skip_trivia();

        let i = self.cursor;

        // We iterate over chars because that is nicer than operating on raw
        // bytes. The map call here fixes the index to be relative to the
        // actual source.
        let mut iter = self.source[i..].char_indices().map(|(d, c)| (i + d, c));

        let (token, j) = match iter.next() {
            None => (Token::Eof, i),
            Some((_, c)) => match c {
                // Single character to token mappings.
                '{' => (Token::LBrace, i + 1),
                '}' => (Token::RBrace, i + 1),
                '[' => (Token::LBracket, i + 1),
                ']' => (Token::RBracket, i + 1),
                ':' => (Token::Colon, i + 1),
                ',' => (Token::Comma, i + 1),

                // Multi-character tokens with a distinct start character.
                '"' => self.lex_string(iter, i)?,
                '0' if self.source[i + 1..].starts_with('x') => self.lex_bytes(i)?,
                '-' | '0'..='9' => self.lex_int(iter, i)?,
                c if is_ident_start(c) => self.lex_ident_or_keyword(iter, i),

                // Any other character...
                _ => return Err(self.err_unexpected_character(i, c.len_utf8())),
            },
        };

        self.cursor = j;

        Ok(Lexeme {
            token,
            span: self.tracker.locate(i),
            len: j - i,
        })
    }

    /// Advance the cursor past whitespace and `//` or `#` line comments.
    fn skip_trivia(&mut self) {
        loop {
            let rest = &self.source[self.cursor..];
            let trimmed = rest.trim_start_matches(is_whitespace);
            self.cursor += rest.len() - trimmed.len();
            if trimmed.starts_with("//") || trimmed.starts_with('#') {
                self.cursor += trimmed.find('\n').unwrap_or(trimmed.len());
            } else {
                return;
            }
        }
    }

    fn lex_string<I>(&mut self, mut iter: I, i: usize) -> Result<(Token<'source>, usize), ParseError>
    where
        I: Iterator<Item = (usize, char)> + Clone,
    {
        // Escapes produce UTF-16 code units so that surrogate pairs written
        // as two `\u` escapes combine into one character.
        let mut units = Vec::new();
        loop {
            let (j, c) = match iter.next() {
                Some(next) => next,
                None => return Err(self.err_malformed_string(i, self.source.len())),
            };
            match c {
                '"' => {
                    let s = String::from_utf16_lossy(&units);
                    return Ok((Token::String(s), j + 1));
                }
                '\\' => {
                    let unit = match iter.next() {
                        Some((_, '"')) => u16::from(b'"'),
                        Some((_, '\\')) => u16::from(b'\\'),
                        Some((_, 'n')) => u16::from(b'\n'),
                        Some((_, 'r')) => u16::from(b'\r'),
                        Some((_, 't')) => u16::from(b'\t'),
                        Some((_, 'u')) => self.lex_unicode_escape(&mut iter, i)?,
                        Some((k, c)) => return Err(self.err_malformed_string(i, k + c.len_utf8())),
                        None => return Err(self.err_malformed_string(i, self.source.len())),
                    };
                    units.push(unit);
                }
                c if !c.is_ascii() => {
                    return Err(self.err_malformed_string(i, j + c.len_utf8()));
                }
                c => units.push(c as u16),
            }
        }
    }

    /// Lex the four hex digits following `\u`.
    fn lex_unicode_escape<I>(&mut self, iter: &mut I, i: usize) -> Result<u16, ParseError>
    where
        I: Iterator<Item = (usize, char)> + Clone,
    {
        let mut unit = 0;
        for _ in 0..4 {
            match iter.next() {
                Some((_, c)) if c.is_ascii_hexdigit() => {
                    // An ASCII hex digit always converts.
                    unit = unit << 4 | c.to_digit(16).unwrap_or_default() as u16;
                }
                Some((k, c)) => return Err(self.err_malformed_string(i, k + c.len_utf8())),
                None => return Err(self.err_malformed_string(i, self.source.len())),
            }
        }
        Ok(unit)
    }

    fn lex_bytes(&mut self, i: usize) -> Result<(Token<'source>, usize), ParseError> {
        let digits = i + 2;
        let iter = self.source[digits..]
            .char_indices()
            .map(|(d, c)| (digits + d, c));
        let j = self.lex_while(iter, |c| c.is_ascii_hexdigit());
        let hex = &self.source[digits..j];
        if hex.is_empty() || hex.len() % 2 != 0 {
            return Err(self.err(ParseErrorKind::MalformedBytesLiteral, i, j - i));
        }
        match hex::decode(hex) {
            Ok(bytes) => Ok((Token::Bytes(bytes), j)),
            Err(_) => Err(self.err(ParseErrorKind::MalformedBytesLiteral, i, j - i)),
        }
    }

    fn lex_int<I>(&mut self, iter: I, i: usize) -> Result<(Token<'source>, usize), ParseError>
    where
        I: Iterator<Item = (usize, char)> + Clone,
    {
        let j = self.lex_while(iter, |c| c.is_ascii_digit());
        match self.source[i..j].parse() {
            Ok(n) => Ok((Token::Int(n), j)),
            // Either a lone `-` or a value that doesn't fit in 64 bits.
            Err(_) => Err(self.err(ParseErrorKind::IntegerOutOfRange, i, j - i)),
        }
    }

    fn lex_ident_or_keyword<I>(&mut self, iter: I, i: usize) -> (Token<'source>, usize)
    where
        I: Iterator<Item = (usize, char)> + Clone,
    {
        let j = self.lex_while(iter, is_ident);
        let tk = match &self.source[i..j] {
            "null" => Token::Null,
            "true" => Token::True,
            "false" => Token::False,
            ident => Token::Ident(ident),
        };
        (tk, j)
    }

    fn lex_while<I, P>(&mut self, mut iter: I, pred: P) -> usize
    where
        I: Iterator<Item = (usize, char)> + Clone,
        P: Fn(char) -> bool,
    {
        loop {
            match iter.clone().next() {
                Some((_, c)) if pred(c) => {
                    iter.next();
                }
                Some((j, _)) => return j,
                None => return self.source.len(),
            }
        }
    }

    fn err(&mut self, kind: ParseErrorKind, i: usize, len: usize) -> ParseError {
        let span = self.tracker.locate(i);
        ParseError::new(kind, self.source, span, len)
    }

    fn err_unexpected_character(&mut self, i: usize, len: usize) -> ParseError {
        let kind = ParseErrorKind::UnexpectedToken {
            expected: "valid token",
            found: "invalid character",
        };
        self.err(kind, i, len)
    }

    /// The error is reported at the opening quote `i` and spans up to `j`.
    fn err_malformed_string(&mut self, i: usize, j: usize) -> ParseError {
        self.err(ParseErrorKind::MalformedStringLiteral, i, j - i)
    }
}

impl Token<'_> {
    pub fn human(&self) -> &'static str {
        match self {
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
            Self::Int(_) => "integer",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Ident(_) => "identifier",
            Self::Eof => "EOF",
        }
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn is_ident_start(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '_')
}

fn is_ident(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='Z' | 'a'..='z' | '_')
}
