use std::{str::FromStr, sync::Arc};

use lazy_static::lazy_static;
use num_bigint::BigInt;
use regex::Regex;
use tracing::{debug, debug_span, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_ERROR, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, TokenValue, SINGLE_CHAR_LOOKUP};

lazy_static! {
    // A second decimal point ends the literal and is left for the scan loop.
    static ref NUMBER_PATTERN: Regex = Regex::new("^[0-9]+(\\.[0-9]*)?").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: Arc<str>,
    position: Position,
    // Byte offset of `current` in `source`.
    offset: usize,
    current: Option<char>,
}

impl Lexer {
    pub fn new(file_name: &str, source: &str) -> Lexer {
        let source: Arc<str> = Arc::from(source);
        let mut lexer = Lexer {
            tokens: vec![],
            position: Position::new(Arc::from(file_name), Arc::clone(&source)),
            source,
            offset: 0,
            current: None,
        };

        lexer.advance();
        lexer
    }

    pub fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.offset += ch.len_utf8();
        }

        self.position.advance(self.current);
        self.current = self.source[self.offset..].chars().next();
    }

    pub fn push(&mut self, token: Token) {
        trace!(target: "arith::lexer", %token, index = self.position.index, "Emitting token");
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.current.unwrap_or_default()
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.offset..]
    }

    pub fn at_eof(&self) -> bool {
        self.current.is_none()
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let span = debug_span!(
            target: "arith::lexer",
            "tokenize",
            file = %self.position.file_name,
            len = self.source.len()
        );
        let _guard = span.enter();

        while !self.at_eof() {
            match self.at() {
                ' ' | '\t' => self.advance(),
                '0'..='9' => {
                    let token = self.number();
                    self.push(token);
                }
                ch => {
                    if let Some(kind) = SINGLE_CHAR_LOOKUP.get(&ch) {
                        self.push(MK_TOKEN!(*kind));
                        self.advance();
                    } else {
                        return Err(self.invalid_character(ch));
                    }
                }
            }
        }

        debug!(
            target: "arith::lexer",
            count = self.tokens.len(),
            literals = self.tokens.iter().filter(|token| token.is_literal()).count(),
            "Tokenized"
        );
        Ok(self.tokens)
    }

    fn number(&mut self) -> Token {
        let matched = match NUMBER_PATTERN.find(self.remainder()) {
            Some(matched) => matched.as_str().to_string(),
            None => unreachable!("number() is only entered on a digit"),
        };

        for _ in matched.chars() {
            self.advance();
        }

        // The run is digits with at most one point, so neither parse can fail.
        if !matched.contains('.') {
            let value = match BigInt::from_str(&matched) {
                Ok(value) => value,
                Err(_) => unreachable!("integer run is all digits"),
            };
            return MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(value));
        }

        let value = matched.parse::<f64>().unwrap_or(f64::INFINITY);
        MK_TOKEN!(TokenKind::Decimal, TokenValue::Decimal(value))
    }

    fn invalid_character(&mut self, character: char) -> Error {
        let start = self.position().snapshot();
        self.advance();
        let end = self.position().snapshot();

        debug!(
            target: "arith::lexer",
            ?character,
            line = start.line,
            column = start.column,
            "Invalid character"
        );

        MK_ERROR!(ErrorImpl::InvalidCharacter { character }, start, end)
    }
}

/// Tokenizes `source`, stopping at the first invalid character.
///
/// `file_name` is only used to label diagnostics.
pub fn tokenize(file_name: &str, source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(file_name, source).tokenize()
}
