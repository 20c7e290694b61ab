//! Core token types shared by the tokenizer, the validity checker and the parser.
//!
//!     A token is an immutable pair of a lexical category ([TokenKind]) and the literal
//!     text it was produced from. The checker and the parser only ever read tokens; they
//!     never look at raw characters again.
//!
//! Operator Classification
//!
//!     Single character operators (`( ) + - * / .`) are classified through a fixed lookup
//!     table, see [lookup]. Any other single character maps to [TokenKind::Unknown].

pub mod core;
pub mod lookup;

pub use self::core::{until_eof, Token, TokenKind};
pub use lookup::lookup_operator;
