//! Lexical analysis for arithmetic expressions.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens. It handles:
//!
//! - Integer and decimal literals (at most one decimal point per literal)
//! - The operators `+ - * /` and parentheses
//! - Skipping spaces and tabs
//! - Position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
