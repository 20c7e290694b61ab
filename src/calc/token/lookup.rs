//! Fixed character to token category table for single character operators.

use super::core::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static OPERATORS: Lazy<HashMap<char, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ('(', TokenKind::LeftParen),
        (')', TokenKind::RightParen),
        ('+', TokenKind::Plus),
        ('-', TokenKind::Minus),
        ('*', TokenKind::Multiply),
        ('/', TokenKind::Divide),
        ('.', TokenKind::Dot),
    ])
});

/// Classify a single character. Characters outside the table are [TokenKind::Unknown].
pub fn lookup_operator(c: char) -> TokenKind {
    OPERATORS.get(&c).copied().unwrap_or(TokenKind::Unknown)
}
