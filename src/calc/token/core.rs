//! Token definitions

use serde::Serialize;
use std::fmt;

/// All lexical categories an expression token can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// End of the token stream.
    Eof,
    LeftParen,
    RightParen,
    Multiply,
    Divide,
    Plus,
    Minus,
    /// A run of decimal digits. Decimal points are separate [TokenKind::Dot] tokens.
    Number,
    Dot,
    /// A printable character that is not part of the expression grammar.
    Unknown,
    /// A character the tokenizer cannot represent at all (control, non-ASCII).
    Illegal,
}

impl TokenKind {
    /// `+`, `*` and `/`. Minus is kept apart since it doubles as unary negation.
    pub fn is_normal_operator(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Multiply | TokenKind::Divide)
    }

    /// Any of the four arithmetic operators.
    pub fn is_operator(&self) -> bool {
        self.is_normal_operator() || matches!(self, TokenKind::Minus)
    }

    /// Check if this token is numeric
    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Number)
    }

    /// Tokens the expression grammar has no place for.
    pub fn is_lexical_error(&self) -> bool {
        matches!(self, TokenKind::Unknown | TokenKind::Illegal)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "end-of-stream",
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::Multiply => "multiply",
            TokenKind::Divide => "divide",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Number => "number",
            TokenKind::Dot => "decimal-point",
            TokenKind::Unknown => "unknown",
            TokenKind::Illegal => "illegal",
        };
        write!(f, "{}", name)
    }
}

/// A single token: its category plus the literal source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-stream marker. Its literal is empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// The portion of a token slice before the first end-of-stream token.
///
/// Token streams do not have to carry an explicit [TokenKind::Eof]; when one is present,
/// nothing after it is part of the expression.
pub fn until_eof(tokens: &[Token]) -> &[Token] {
    match tokens.iter().position(|t| t.kind == TokenKind::Eof) {
        Some(end) => &tokens[..end],
        None => tokens,
    }
}
