//! # calc-parser
//!
//! Validity checking and parsing for arithmetic expressions.
//!
//! Raw text is split into typed tokens, the token stream is verified for structural
//! problems (parenthesis balance, operator adjacency, decimal points), and a verified
//! stream is turned into a precedence-aware expression tree for an evaluator to reduce.
//!
//! ```text
//! "(1+2)*3" -> tokenize -> check -> parse -> Group[Group[1 + 2] * 3]
//! ```
//!
//! ## Testing
//!
//! Shared token factories and tree assertions live in the [testing module](calc::testing).

pub mod calc;

pub use calc::ast::{AddOp, Group, MulOp, Node, NodePath, ParseError, Resolution};
pub use calc::lexing::tokenize;
pub use calc::parsing::{parse, Parser, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
pub use calc::token::{Token, TokenKind};
pub use calc::validity::{check, ValidityChecker, ValidityError};
