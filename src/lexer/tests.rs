//! Unit tests for the lexer module.
//!
//! - Single character operators and parentheses
//! - Integer and decimal literals
//! - Whitespace skipping
//! - Invalid characters and their recorded positions

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind, TokenValue},
};
use num_bigint::BigInt;

use crate::errors::errors::ErrorImpl;

#[test]
fn test_tokenize_single_characters() {
    let cases = [
        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
    ];

    for (source, kind) in cases {
        let tokens = tokenize("test.arith", source).unwrap();
        assert_eq!(tokens, vec![Token::new(kind)], "source: {:?}", source);
    }
}

#[test]
fn test_tokenize_integer() {
    let tokens = tokenize("test.arith", "42").unwrap();
    assert_eq!(tokens, vec![Token::integer(42)]);
    assert_eq!(tokens[0].value, Some(TokenValue::Integer(BigInt::from(42))));
}

#[test]
fn test_tokenize_zero() {
    let tokens = tokenize("test.arith", "0").unwrap();
    assert_eq!(tokens, vec![Token::integer(0)]);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_tokenize_decimal() {
    let tokens = tokenize("test.arith", "3.14").unwrap();
    assert_eq!(tokens, vec![Token::decimal(3.14)]);
    assert_eq!(tokens[0].kind, TokenKind::Decimal);
}

#[test]
fn test_tokenize_trailing_decimal_point() {
    let tokens = tokenize("test.arith", "1.").unwrap();
    assert_eq!(tokens, vec![Token::decimal(1.0)]);
}

#[test]
fn test_tokenize_leading_zeros() {
    let tokens = tokenize("test.arith", "007 00.50").unwrap();
    assert_eq!(tokens, vec![Token::integer(7), Token::decimal(0.5)]);
}

#[test]
fn test_tokenize_skips_spaces_and_tabs() {
    let tokens = tokenize("test.arith", "  1 \t +\t\t 2  ").unwrap();
    assert_eq!(
        tokens,
        vec![Token::integer(1), Token::new(TokenKind::Plus), Token::integer(2)]
    );
}

#[test]
fn test_tokenize_adjacent_tokens() {
    let tokens = tokenize("test.arith", "2*(3-1)/4").unwrap();
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Integer,
            TokenKind::Star,
            TokenKind::OpenParen,
            TokenKind::Integer,
            TokenKind::Dash,
            TokenKind::Integer,
            TokenKind::CloseParen,
            TokenKind::Slash,
            TokenKind::Integer,
        ]
    );
}

#[test]
fn test_tokenize_negative_number_is_two_tokens() {
    let tokens = tokenize("test.arith", "-5").unwrap();
    assert_eq!(tokens, vec![Token::new(TokenKind::Dash), Token::integer(5)]);
}

#[test]
fn test_tokenize_empty() {
    let tokens = tokenize("test.arith", "").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_tokenize_whitespace_only() {
    let tokens = tokenize("test.arith", " \t ").unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn test_second_decimal_point_is_invalid() {
    let error = tokenize("test.arith", "1.2.3").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '.' });
    assert_eq!(error.get_span().start.index, 3);
    assert_eq!(error.get_span().end.index, 4);
}

#[test]
fn test_double_point_right_after_digits() {
    let error = tokenize("test.arith", "12..").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '.' });
    assert_eq!(error.get_span().start.index, 3);
}

#[test]
fn test_lone_decimal_point_is_invalid() {
    let error = tokenize("test.arith", ".").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '.' });

    let error = tokenize("test.arith", ".5").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '.' });
    assert_eq!(error.get_span().start.index, 0);
}

#[test]
fn test_unknown_character() {
    let error = tokenize("test.arith", "1 $ 2").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '$' });
    assert_eq!(error.get_details(), "'$'");
    assert_eq!(error.get_span().start.line, 0);
    assert_eq!(error.get_span().start.column, 2);
    assert_eq!(error.get_span().end.column, 3);
}

#[test]
fn test_newline_is_invalid() {
    let error = tokenize("test.arith", "1\n+").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '\n' });

    let start = &error.get_span().start;
    assert_eq!((start.index, start.line, start.column), (1, 0, 1));

    // The end snapshot is taken after stepping over the line feed.
    let end = &error.get_span().end;
    assert_eq!((end.index, end.line, end.column), (2, 1, 0));
}

#[test]
fn test_carriage_return_is_invalid() {
    let error = tokenize("test.arith", "1\r").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '\r' });
}

#[test]
fn test_non_ascii_character_positions() {
    let error = tokenize("test.arith", "1 × 2 €").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '×' });
    assert_eq!(error.get_span().start.index, 2);
    assert_eq!(error.get_span().end.index, 3);
}

#[test]
fn test_non_ascii_digits_are_invalid() {
    let error = tokenize("test.arith", "٣").unwrap_err();
    assert_eq!(error.kind(), &ErrorImpl::InvalidCharacter { character: '٣' });
}

#[test]
fn test_integer_beyond_i64() {
    let tokens = tokenize("test.arith", "1 + 99999999999999999999").unwrap();

    let big = "99999999999999999999".parse::<BigInt>().unwrap();
    assert_eq!(
        tokens,
        vec![Token::integer(1), Token::new(TokenKind::Plus), Token::integer(big)]
    );
    assert_eq!(tokens[2].to_string(), "Integer:99999999999999999999");
}

#[test]
fn test_long_integer_is_followed_by_next_token() {
    let digits = "1".repeat(64);
    let source = format!("{})", digits);
    let tokens = tokenize("test.arith", &source).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(
        tokens[0].value,
        Some(TokenValue::Integer(digits.parse::<BigInt>().unwrap()))
    );
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
}

#[test]
fn test_largest_integer() {
    let tokens = tokenize("test.arith", "9223372036854775807").unwrap();
    assert_eq!(tokens, vec![Token::integer(i64::MAX)]);
}

#[test]
fn test_error_file_name_is_recorded() {
    let error = tokenize("calc.arith", "#").unwrap_err();
    assert_eq!(&*error.get_span().start.file_name, "calc.arith");
    assert_eq!(&*error.get_span().start.source, "#");
}

#[test]
fn test_lexer_loads_first_character() {
    let lexer = Lexer::new("test.arith", "7+1");
    assert_eq!(lexer.at(), '7');
    assert_eq!(lexer.position().index, 0);
    assert_eq!(lexer.position().column, 0);
    assert!(!lexer.at_eof());
}

#[test]
fn test_lexer_on_empty_source_is_at_eof() {
    let lexer = Lexer::new("test.arith", "");
    assert!(lexer.at_eof());
    assert_eq!(lexer.at(), '\0');
    assert_eq!(lexer.position().index, 0);
}

#[test]
fn test_lexer_advance_and_remainder() {
    let mut lexer = Lexer::new("test.arith", "1 + 2");
    lexer.advance();
    lexer.advance();
    assert_eq!(lexer.at(), '+');
    assert_eq!(lexer.remainder(), "+ 2");
}

#[test]
fn test_token_display() {
    assert_eq!(Token::integer(42).to_string(), "Integer:42");
    assert_eq!(Token::integer(0).to_string(), "Integer:0");
    assert_eq!(Token::new(TokenKind::Plus).to_string(), "Plus");
    assert_eq!(Token::decimal(3.5).to_string(), "Decimal:3.5");
    assert_eq!(Token::decimal(1.0).to_string(), "Decimal:1.0");
    assert_eq!(Token::new(TokenKind::OpenParen).to_string(), "OpenParen");
}

#[test]
fn test_token_is_literal() {
    assert!(Token::integer(1).is_literal());
    assert!(Token::decimal(1.5).is_literal());
    assert!(!Token::new(TokenKind::Star).is_literal());
}
