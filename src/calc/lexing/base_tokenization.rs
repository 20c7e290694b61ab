//! Base tokenization using the logos lexer library.
//!
//! This is the entry point where source strings become token streams.

use crate::calc::token::{lookup_operator, Token, TokenKind};
use logos::Logos;
use std::ops::Range;

/// Raw lexemes as recognised by logos, before operator classification.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"\s+")]
enum RawToken {
    #[regex(r"[0-9]+")]
    Digits,

    // Any single non-whitespace, non-digit character
    #[regex(r"[^\s0-9]")]
    Symbol,
}

fn classify_symbol(slice: &str) -> TokenKind {
    match slice.chars().next() {
        Some(c) if c.is_ascii_graphic() => lookup_operator(c),
        _ => TokenKind::Illegal,
    }
}

/// Tokenize source text, keeping the byte range of every token.
pub fn tokenize_with_spans(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let kind = match result {
            Ok(RawToken::Digits) => TokenKind::Number,
            Ok(RawToken::Symbol) => classify_symbol(slice),
            Err(()) => TokenKind::Illegal,
        };
        tokens.push((Token::new(kind, slice), lexer.span()));
    }

    tokens
}

/// Tokenize source text into an ordered token sequence.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}
