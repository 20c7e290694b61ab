//! Recursive descent over the token stream.

use crate::calc::ast::{AddOp, Group, MulOp, Node, ParseError};
use crate::calc::token::{until_eof, Token, TokenKind};
pub use calc_config::MAX_DEPTH_CEILING;
use log::trace;

/// Deepest parenthesis nesting accepted unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parser settings. Parsing itself keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    max_depth: usize,
}

/// Position in the token stream shared by all nesting levels of one parse.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn next(&mut self) -> Option<(usize, &'a Token)> {
        let tokens = self.tokens;
        let token = tokens.get(self.pos)?;
        let index = self.pos;
        self.pos += 1;
        Some((index, token))
    }

    fn peek_kind(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| t.kind)
    }
}

impl Parser {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the nesting limit, clamped to [MAX_DEPTH_CEILING].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_CEILING);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the tree for `tokens`. Tokens after an end-of-stream token are ignored.
    pub fn parse(&self, tokens: &[Token]) -> Result<Group, ParseError> {
        let mut cursor = Cursor {
            tokens: until_eof(tokens),
            pos: 0,
        };
        self.parse_group(&mut cursor, 0)
    }

    fn parse_group(&self, cursor: &mut Cursor<'_>, depth: usize) -> Result<Group, ParseError> {
        let mut children = Vec::new();

        while let Some((index, token)) = cursor.next() {
            match token.kind {
                TokenKind::Number => {
                    let value = read_literal(cursor, index, &token.literal)?;
                    children.push(Node::Literal(value));
                }
                TokenKind::LeftParen => {
                    if depth == self.max_depth {
                        return Err(ParseError::NestingTooDeep {
                            limit: self.max_depth,
                        });
                    }
                    trace!("open group at token {} (depth {})", index, depth + 1);
                    let nested = self.parse_group(cursor, depth + 1)?;
                    children.push(Node::Group(nested));
                }
                TokenKind::RightParen => {
                    if depth == 0 {
                        return Err(ParseError::MalformedGrouping { index });
                    }
                    trace!("close group at token {} (depth {})", index, depth);
                    return Ok(Group::new(children));
                }
                TokenKind::Multiply => children.push(Node::MultiplicativeOp(MulOp::Multiply)),
                TokenKind::Divide => children.push(Node::MultiplicativeOp(MulOp::Divide)),
                TokenKind::Plus => children.push(Node::AdditiveOp(AddOp::Plus)),
                TokenKind::Minus => children.push(Node::AdditiveOp(AddOp::Minus)),
                kind @ (TokenKind::Dot | TokenKind::Unknown | TokenKind::Illegal | TokenKind::Eof) => {
                    return Err(ParseError::UnexpectedToken { index, kind });
                }
            }
        }

        if depth > 0 {
            return Err(ParseError::MalformedGrouping {
                index: cursor.tokens.len(),
            });
        }
        Ok(Group::new(children))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a numeric literal starting at the number just consumed, joining a following
/// `. number` into the same literal. Hand-built number tokens need not hold digits.
fn read_literal(cursor: &mut Cursor<'_>, index: usize, digits: &str) -> Result<f64, ParseError> {
    let mut text = digits.to_string();

    if cursor.peek_kind(0) == Some(TokenKind::Dot)
        && cursor.peek_kind(1) == Some(TokenKind::Number)
    {
        cursor.next();
        if let Some((_, fraction)) = cursor.next() {
            text.push('.');
            text.push_str(&fraction.literal);
        }
    }

    text.parse::<f64>()
        .map_err(|_| ParseError::UnexpectedToken {
            index,
            kind: TokenKind::Number,
        })
}

/// Parse with the default nesting limit.
pub fn parse(tokens: &[Token]) -> Result<Group, ParseError> {
    Parser::new().parse(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::lexing::tokenize;

    fn lit(value: f64) -> Node {
        Node::Literal(value)
    }

    #[test]
    fn test_flat_expression() {
        let group = parse(&tokenize("1+2*3")).unwrap();
        assert_eq!(
            group.children,
            vec![
                lit(1.0),
                Node::AdditiveOp(AddOp::Plus),
                lit(2.0),
                Node::MultiplicativeOp(MulOp::Multiply),
                lit(3.0),
            ]
        );
    }

    #[test]
    fn test_grouping() {
        let group = parse(&tokenize("(1+2)*3")).unwrap();
        assert_eq!(
            group.children,
            vec![
                Node::Group(Group::new(vec![
                    lit(1.0),
                    Node::AdditiveOp(AddOp::Plus),
                    lit(2.0)
                ])),
                Node::MultiplicativeOp(MulOp::Multiply),
                lit(3.0),
            ]
        );
    }

    #[test]
    fn test_scanning_resumes_after_closing_paren() {
        let group = parse(&tokenize("(1)-(2/(3))")).unwrap();
        assert_eq!(group.to_string(), "(1) - (2 / (3))");
        assert_eq!(group.depth(), 2);
    }

    #[test]
    fn test_unary_minus_stays_in_place() {
        let group = parse(&tokenize("3*-2")).unwrap();
        assert_eq!(
            group.children,
            vec![
                lit(3.0),
                Node::MultiplicativeOp(MulOp::Multiply),
                Node::AdditiveOp(AddOp::Minus),
                lit(2.0),
            ]
        );
    }

    #[test]
    fn test_decimal_literals_are_joined() {
        let group = parse(&tokenize("1.5/0.25")).unwrap();
        assert_eq!(
            group.children,
            vec![lit(1.5), Node::MultiplicativeOp(MulOp::Divide), lit(0.25)]
        );
    }

    #[test]
    fn test_empty_input_is_an_empty_root() {
        assert_eq!(parse(&[]).unwrap(), Group::default());
        assert_eq!(parse(&tokenize("()")).unwrap().children, vec![Node::Group(Group::default())]);
    }

    #[test]
    fn test_unmatched_parens() {
        assert_eq!(
            parse(&tokenize("1)")),
            Err(ParseError::MalformedGrouping { index: 1 })
        );
        assert_eq!(
            parse(&tokenize("(1+2")),
            Err(ParseError::MalformedGrouping { index: 4 })
        );
    }

    #[test]
    fn test_stray_dots() {
        assert_eq!(
            parse(&tokenize(".5")),
            Err(ParseError::UnexpectedToken {
                index: 0,
                kind: TokenKind::Dot
            })
        );
        assert_eq!(
            parse(&tokenize("5.")),
            Err(ParseError::UnexpectedToken {
                index: 1,
                kind: TokenKind::Dot
            })
        );
    }

    #[test]
    fn test_unknown_tokens() {
        assert_eq!(
            parse(&tokenize("2^3")),
            Err(ParseError::UnexpectedToken {
                index: 1,
                kind: TokenKind::Unknown
            })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let parser = Parser::new().with_max_depth(2);
        assert!(parser.parse(&tokenize("((1))")).is_ok());
        assert_eq!(
            parser.parse(&tokenize("(((1)))")),
            Err(ParseError::NestingTooDeep { limit: 2 })
        );
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let source = format!("{}1{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(
            parse(&tokenize(&source)),
            Err(ParseError::NestingTooDeep {
                limit: DEFAULT_MAX_DEPTH
            })
        );
    }

    #[test]
    fn test_depth_is_clamped_to_ceiling() {
        let parser = Parser::new().with_max_depth(10_000_000);
        assert_eq!(parser.max_depth(), MAX_DEPTH_CEILING);

        let source = format!("{}1{}", "(".repeat(500_000), ")".repeat(500_000));
        assert_eq!(
            parser.parse(&tokenize(&source)),
            Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH_CEILING
            })
        );
    }

    #[test]
    fn test_non_numeric_number_token() {
        let tokens = vec![Token::new(TokenKind::Number, "x")];
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnexpectedToken {
                index: 0,
                kind: TokenKind::Number
            })
        );
    }

    #[test]
    fn test_eof_token_closes_root() {
        let mut tokens = tokenize("4");
        tokens.push(Token::eof());
        tokens.push(Token::new(TokenKind::RightParen, ")"));
        assert_eq!(parse(&tokens).unwrap().children, vec![lit(4.0)]);
    }
}
