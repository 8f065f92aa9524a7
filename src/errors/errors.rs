use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { .. } => "Invalid Character",
        }
    }

    pub fn get_details(&self) -> String {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character } => format!("'{}'", character),
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidCharacter { character: '.' } => ErrorTip::Suggestion(String::from(
                "a decimal point must follow a digit and may appear once per number",
            )),
            ErrorImpl::InvalidCharacter { character: '\n' } => ErrorTip::Suggestion(String::from(
                "line breaks are not allowed inside an expression",
            )),
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
        }
    }
}

/// Two lines: `<title>: <detail>` then the file name and 1-based line.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = &self.span.start;
        writeln!(f, "{}: {}", self.get_error_name(), self.get_details())?;
        write!(f, "File {}, line {}", start.file_name, start.line + 1)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid character: {character:?}")]
    InvalidCharacter { character: char },
}
