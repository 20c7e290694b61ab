//! Error kinds reported by the validity checker

use calc_config::MessageTable;
use serde::Serialize;
use std::fmt;

/// The structural rule a token stream broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidityError {
    /// A `)` appeared with no open `(` to close.
    LeftParenShortage,
    /// The stream ended with `(` still open.
    RightParenShortage,
    /// Operators follow each other in a way the grammar does not allow, or the stream
    /// ends on an operator.
    OperatorInvalid,
    /// A `.` not surrounded by numbers.
    DotInvalid,
}

impl ValidityError {
    /// Every error kind, in declaration order.
    pub const ALL: [ValidityError; 4] = [
        ValidityError::LeftParenShortage,
        ValidityError::RightParenShortage,
        ValidityError::OperatorInvalid,
        ValidityError::DotInvalid,
    ];

    /// Human-readable text for this kind, taken from the configured message table.
    pub fn message<'a>(&self, messages: &'a MessageTable) -> &'a str {
        match self {
            ValidityError::LeftParenShortage => &messages.left_paren_shortage,
            ValidityError::RightParenShortage => &messages.right_paren_shortage,
            ValidityError::OperatorInvalid => &messages.operator_invalid,
            ValidityError::DotInvalid => &messages.dot_invalid,
        }
    }
}

impl fmt::Display for ValidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityError::LeftParenShortage => write!(f, "'(' is missing"),
            ValidityError::RightParenShortage => write!(f, "')' is missing"),
            ValidityError::OperatorInvalid => {
                write!(f, "operators follow each other in an invalid way")
            }
            ValidityError::DotInvalid => write!(f, "'.' must be surrounded by numbers"),
        }
    }
}

impl std::error::Error for ValidityError {}
