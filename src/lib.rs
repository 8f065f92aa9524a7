#![allow(clippy::module_inception)]

use std::sync::Arc;

pub mod config;
pub mod errors;
pub mod lexer;
pub mod logger;
pub mod macros;

extern crate regex;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind, TokenValue};

/// Cursor over a source text.
///
/// `index` and `column` count characters and start at -1 before the first
/// character has been loaded. `line` and `column` are 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub index: isize,
    pub line: usize,
    pub column: isize,
    pub file_name: Arc<str>,
    pub source: Arc<str>,
}

impl Position {
    pub fn new(file_name: Arc<str>, source: Arc<str>) -> Self {
        Position {
            index: -1,
            line: 0,
            column: -1,
            file_name,
            source,
        }
    }

    /// Moves one character forward. `previous` is the character being left
    /// behind; leaving a line feed starts a new line.
    ///
    /// No bounds checking happens here.
    pub fn advance(&mut self, previous: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if previous == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// Independent copy of the cursor, for storing in diagnostics.
    pub fn snapshot(&self) -> Position {
        self.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of that line (without its
/// terminator) and the 0-based column of `position`.
pub fn get_line_at_position(position: &Position) -> (usize, String, usize) {
    let line_text = position
        .source
        .split('\n')
        .nth(position.line)
        .unwrap_or("")
        .trim_end_matches('\r');

    (
        position.line + 1,
        line_text.to_string(),
        position.column.max(0) as usize,
    )
}
