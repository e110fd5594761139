use std::mem;

use crate::error::{ParseError, ParseErrorKind};
use crate::text::lex::{Lexeme, Lexer, Token};
use crate::types::limits::Limits;
use crate::value::{List, Map};
use crate::Value;

/// A parser that constructs a [`Value`] from a token stream.
///
/// The parser is a hand written recursive descent parser. It always holds
/// exactly one token of lookahead. Recursion is bounded by the maximum depth
/// in [`Limits`].
pub struct Parser<'source> {
    /// A lexer that tokenizes the source.
    tokens: Lexer<'source>,

    /// The next token.
    lookahead: Lexeme<'source>,

    /// The maximum number of nested lists and maps.
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Construct a new parser, lexing the first token.
    pub fn new(source: &'source str, limits: &Limits) -> Result<Self, ParseError> {
        let mut tokens = Lexer::new(source);
        let lookahead = tokens.next()?;
        Ok(Self {
            tokens,
            lookahead,
            max_depth: limits.max_depth,
        })
    }

    /// Parses the whole source as a single value.
    pub fn parse_root(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        if !self.is_next(&Token::Eof) {
            return Err(self.err_unexpected_token("EOF"));
        }
        Ok(value)
    }

    /// Parses any value. `depth` is the number of enclosing lists and maps.
    ///
    /// A value of the form `ident { ... }` is shorthand for a map with a
    /// single entry.
    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        let value = match &mut self.lookahead.token {
            Token::Null => Value::Null,
            Token::True => Value::Bool(true),
            Token::False => Value::Bool(false),
            Token::Int(n) => Value::Int(*n),
            Token::String(s) => Value::String(mem::take(s)),
            Token::Bytes(b) => Value::Bytes(mem::take(b)),
            Token::LBracket => return self.parse_list(depth),
            Token::LBrace => return self.parse_map(depth),
            Token::Ident(_) => return self.parse_shorthand(depth),
            _ => return Err(self.err_unexpected_token("value")),
        };
        self.next()?;
        Ok(value)
    }

    /// Parses a list, e.g. `[1, "two", 0x03,]`.
    fn parse_list(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        self.expect(Token::LBracket)?;

        let mut list = List::new();
        while !self.is_next(&Token::RBracket) {
            list.push(self.parse_value(depth + 1)?);
            match self.peek() {
                Token::Comma => {
                    self.next()?;
                }
                Token::RBracket => {}
                _ => return Err(self.err_unexpected_token("',' or ']'")),
            }
        }

        self.expect(Token::RBracket)?;
        Ok(Value::List(list))
    }

    /// Parses a map, e.g. `{ a: 1, b { c: 2 } }`.
    ///
    /// Entries are separated by commas or simply follow one another. A key
    /// directly followed by `{` takes a map value without a colon. When a
    /// key repeats the last entry wins.
    fn parse_map(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        self.expect(Token::LBrace)?;

        let mut map = Map::new();
        while !self.is_next(&Token::RBrace) {
            let key = self.parse_key()?;
            let value = match self.peek() {
                Token::LBrace => self.parse_map(depth + 1)?,
                _ => {
                    self.expect(Token::Colon)?;
                    self.parse_value(depth + 1)?
                }
            };
            map.insert(key.to_owned(), value);
            match self.peek() {
                Token::Comma => {
                    self.next()?;
                }
                Token::RBrace | Token::Ident(_) => {}
                _ => return Err(self.err_unexpected_token("',' or '}'")),
            }
        }

        self.expect(Token::RBrace)?;
        Ok(Value::Map(map))
    }

    /// Parses `ident { ... }` into a single entry map.
    fn parse_shorthand(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.enter(depth)?;
        let key = self.parse_key()?;
        if !self.is_next(&Token::LBrace) {
            return Err(self.err_unexpected_token("map or value"));
        }
        let value = self.parse_map(depth + 1)?;
        let mut map = Map::new();
        map.insert(key.to_owned(), value);
        Ok(Value::Map(map))
    }

    /// Parses an identifier used as a map key.
    fn parse_key(&mut self) -> Result<&'source str, ParseError> {
        match self.peek() {
            Token::Ident(key) => {
                let key = *key;
                self.next()?;
                Ok(key)
            }
            _ => Err(self.err_unexpected_token("identifier")),
        }
    }

    fn enter(&self, depth: usize) -> Result<(), ParseError> {
        if depth >= self.max_depth {
            return Err(self.err(ParseErrorKind::NestingTooDeep));
        }
        Ok(())
    }

    /// Consumes the next token if it is equal to the provided one.
    fn expect(&mut self, exp: Token<'static>) -> Result<Lexeme<'source>, ParseError> {
        if *self.peek() == exp {
            self.next()
        } else {
            Err(self.err_unexpected_token(exp.human()))
        }
    }

    /// Returns `true` if the next token is equal to the provided one.
    fn is_next(&self, token: &Token<'_>) -> bool {
        self.peek() == token
    }

    /// Returns a reference to the next token without consuming it.
    fn peek(&self) -> &Token<'source> {
        &self.lookahead.token
    }

    /// Returns the next token and lexes the one after it.
    fn next(&mut self) -> Result<Lexeme<'source>, ParseError> {
        let next = self.tokens.next()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn err(&self, kind: ParseErrorKind) -> ParseError {
        let Lexeme { span, len, .. } = self.lookahead;
        ParseError::new(kind, self.tokens.source, span, len)
    }

    fn err_unexpected_token(&self, expected: &'static str) -> ParseError {
        let found = self.lookahead.token.human();
        self.err(ParseErrorKind::UnexpectedToken { expected, found })
    }
}
