use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref SINGLE_CHAR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Plus);
        map.insert('-', TokenKind::Dash);
        map.insert('*', TokenKind::Star);
        map.insert('/', TokenKind::Slash);
        map.insert('(', TokenKind::OpenParen);
        map.insert(')', TokenKind::CloseParen);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Integer,
    Decimal,

    Plus,  // +
    Dash,  // -
    Star,  // *
    Slash, // /

    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TokenValue {
    Integer(BigInt),
    Decimal(f64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Decimal(value) => write!(f, "{:?}", value),
        }
    }
}

/// A lexical unit. `value` is only set for `Integer` and `Decimal`.
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<TokenValue>,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.kind, value),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Token { kind, value: None }
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        Token {
            kind: TokenKind::Integer,
            value: Some(TokenValue::Integer(value.into())),
        }
    }

    pub fn decimal(value: f64) -> Self {
        Token {
            kind: TokenKind::Decimal,
            value: Some(TokenValue::Decimal(value)),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::Integer | TokenKind::Decimal)
    }
}
