//! Lexer
//!
//!     Reference tokenizer producing the token stream the validity checker and the parser
//!     consume. The core never depends on it: any producer of [Token] sequences works.
//!
//! Rules
//!
//!     - Runs of decimal digits become one [TokenKind::Number]. A decimal point is its own
//!       [TokenKind::Dot] token, so `1.5` is `Number Dot Number`; the parser joins them back.
//!     - Whitespace separates tokens and is dropped.
//!     - Any other printable ASCII character is classified by the operator lookup table,
//!       yielding [TokenKind::Unknown] when it is not an operator.
//!     - Everything else (control characters, non-ASCII) is [TokenKind::Illegal].
//!
//!     No end-of-stream token is appended: the end of the vector is the end of the stream.

pub mod base_tokenization;

pub use base_tokenization::{tokenize, tokenize_with_spans};

/// Re-export token types for consumers that import them from `lexing`
pub use crate::calc::token::{Token, TokenKind};
