//! Error types for tree construction

use crate::calc::token::TokenKind;
use serde::Serialize;
use std::fmt;

/// Errors the parser raises on input the validity checker would have rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// A `)` with nothing to close, or a `(` never closed. `index` is the offending token,
    /// or the stream length when the stream ran out inside a group.
    MalformedGrouping { index: usize },
    /// Parenthesis nesting went past the parser's limit.
    NestingTooDeep { limit: usize },
    /// A token that has no place in the tree, such as a `.` outside a `number . number` run.
    UnexpectedToken { index: usize, kind: TokenKind },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedGrouping { index } => {
                write!(f, "Malformed grouping at token {}", index)
            }
            ParseError::NestingTooDeep { limit } => {
                write!(f, "Parentheses nested deeper than {} levels", limit)
            }
            ParseError::UnexpectedToken { index, kind } => {
                write!(f, "Unexpected {} token at {}", kind, index)
            }
        }
    }
}

impl std::error::Error for ParseError {}
