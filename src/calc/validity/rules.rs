//! The three structural rules.
//!
//! Each rule is a pure function over a token slice returning the first violation it
//! finds. None of them look past an end-of-stream token; callers pass slices already cut
//! with [until_eof](crate::calc::token::until_eof).

use super::error::ValidityError;
use crate::calc::token::{Token, TokenKind};
use log::debug;

/// Depth counter over the stream: `(` opens, `)` closes.
///
/// Fails with [ValidityError::LeftParenShortage] as soon as the depth goes negative, and with
/// [ValidityError::RightParenShortage] if the stream ends with groups still open.
pub fn check_parens(tokens: &[Token]) -> Result<(), ValidityError> {
    let mut depth: usize = 0;

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => {
                if depth == 0 {
                    debug!("unmatched ')' at token {}", index);
                    return Err(ValidityError::LeftParenShortage);
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if depth != 0 {
        debug!("{} unclosed '(' at end of stream", depth);
        return Err(ValidityError::RightParenShortage);
    }
    Ok(())
}

/// Operators must be followed by something, never by `+ * /`, and an operator followed by
/// `-` must then be followed by a number (`3 * -2`).
///
/// What comes before an operator is not examined, so a leading `*` passes, and neither is
/// an operator followed by a parenthesis.
pub fn check_operators(tokens: &[Token]) -> Result<(), ValidityError> {
    let mut i = 0;

    while i < tokens.len() {
        if tokens[i].kind.is_operator() {
            let operator_index = i;
            i += 1;

            let next = tokens.get(i).ok_or_else(|| {
                debug!("stream ends on operator at token {}", operator_index);
                ValidityError::OperatorInvalid
            })?;

            if next.kind.is_normal_operator() {
                debug!("operator '{}' follows operator at token {}", next, operator_index);
                return Err(ValidityError::OperatorInvalid);
            }

            if next.kind == TokenKind::Minus {
                i += 1;
                match tokens.get(i) {
                    None => {
                        debug!("stream ends on '-' after operator at token {}", operator_index);
                        return Err(ValidityError::OperatorInvalid);
                    }
                    Some(operand) if !operand.kind.is_number() => {
                        debug!("'-' after operator is followed by '{}' at token {}", operand, i);
                        return Err(ValidityError::OperatorInvalid);
                    }
                    Some(_) => {}
                }
            }
        }
        i += 1;
    }

    Ok(())
}

/// Every `.` strictly inside the stream needs a number on both sides.
///
/// The first and last positions are never examined.
pub fn check_dots(tokens: &[Token]) -> Result<(), ValidityError> {
    let mut i = 1;

    while i + 1 < tokens.len() {
        if tokens[i].kind == TokenKind::Dot {
            if tokens[i - 1].kind.is_number() && tokens[i + 1].kind.is_number() {
                // the fraction digits cannot be a dot, skip them
                i += 1;
            } else {
                debug!("'.' without surrounding numbers at token {}", i);
                return Err(ValidityError::DotInvalid);
            }
        }
        i += 1;
    }

    Ok(())
}
