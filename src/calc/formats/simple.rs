//! Plain text renderings.

use crate::calc::ast::Group;
use crate::calc::token::Token;

/// Token literals separated by single spaces.
pub fn tokens_to_simple_str(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.literal.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The tree written back as infix text, with explicit parentheses for every group.
pub fn tree_to_simple_str(root: &Group) -> String {
    root.to_string()
}
