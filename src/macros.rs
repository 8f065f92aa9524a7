//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance, with or without a literal value
//! - `MK_ERROR!` - Creates an Error spanning two position snapshots

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let plus = MK_TOKEN!(TokenKind::Plus);
/// let number = MK_TOKEN!(TokenKind::Integer, TokenValue::Integer(42));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr) => {
        Token {
            kind: $kind,
            value: None,
        }
    };
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: Some($value),
        }
    };
}

/// Creates an Error from an `ErrorImpl` and the start/end snapshots.
#[macro_export]
macro_rules! MK_ERROR {
    ($error_impl:expr, $start:expr, $end:expr) => {
        Error::new(
            $error_impl,
            Span {
                start: $start,
                end: $end,
            },
        )
    };
}
