//! Test factories for building tokens and trees succinctly
//!
//!     Tests for the checker and the parser should not depend on the tokenizer when the
//!     point is the token sequence itself (the checker has to handle streams the reference
//!     tokenizer never produces, like an explicit end-of-stream token). These helpers build
//!     such streams from symbols, and build expected trees without the enum noise.

use crate::calc::ast::{AddOp, Group, MulOp, Node};
use crate::calc::token::{lookup_operator, Token, TokenKind};

/// Make a single token
pub fn mk_token(kind: TokenKind, literal: &str) -> Token {
    Token::new(kind, literal)
}

/// Make a vector of tokens from a list of (kind, literal)
pub fn mk_tokens(specs: &[(TokenKind, &str)]) -> Vec<Token> {
    specs
        .iter()
        .map(|(kind, literal)| mk_token(*kind, literal))
        .collect()
}

/// Make tokens from whitespace separated symbols: digit runs become numbers, `$` becomes
/// the end-of-stream token and everything else goes through the operator table.
///
/// `sym_tokens("( 1 + 2 ) $")`
pub fn sym_tokens(symbols: &str) -> Vec<Token> {
    symbols
        .split_whitespace()
        .map(|symbol| {
            if symbol == "$" {
                Token::eof()
            } else if symbol.chars().all(|c| c.is_ascii_digit()) {
                mk_token(TokenKind::Number, symbol)
            } else {
                let mut chars = symbol.chars();
                let kind = match (chars.next(), chars.next()) {
                    (Some(c), None) => lookup_operator(c),
                    _ => TokenKind::Unknown,
                };
                mk_token(kind, symbol)
            }
        })
        .collect()
}

pub fn lit(value: f64) -> Node {
    Node::Literal(value)
}

pub fn group(children: Vec<Node>) -> Node {
    Node::Group(Group::new(children))
}

pub fn plus() -> Node {
    Node::AdditiveOp(AddOp::Plus)
}

pub fn minus() -> Node {
    Node::AdditiveOp(AddOp::Minus)
}

pub fn times() -> Node {
    Node::MultiplicativeOp(MulOp::Multiply)
}

pub fn divide() -> Node {
    Node::MultiplicativeOp(MulOp::Divide)
}
