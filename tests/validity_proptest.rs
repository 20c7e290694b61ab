//! Property-based tests for the validity checker
//!
//! These tests generate token streams and expression sources and verify the structural
//! rules hold for all of them, not only for hand picked samples.

use calc_parser::calc::testing::mk_token;
use calc_parser::calc::validity::rules::{check_dots, check_operators, check_parens};
use calc_parser::{check, parse, tokenize, Token, TokenKind, ValidityError};
use proptest::prelude::*;

/// Any single token the tokenizer can produce for the expression alphabet
fn any_token() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(mk_token(TokenKind::LeftParen, "(")),
        Just(mk_token(TokenKind::RightParen, ")")),
        Just(mk_token(TokenKind::Plus, "+")),
        Just(mk_token(TokenKind::Minus, "-")),
        Just(mk_token(TokenKind::Multiply, "*")),
        Just(mk_token(TokenKind::Divide, "/")),
        Just(mk_token(TokenKind::Dot, ".")),
        "[0-9]{1,3}".prop_map(|digits| mk_token(TokenKind::Number, &digits)),
    ]
}

fn token_stream() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(any_token(), 0..24)
}

/// Token streams without parentheses, so the paren rule never fires first
fn flat_token_stream() -> impl Strategy<Value = Vec<Token>> {
    token_stream().prop_map(|tokens| {
        tokens
            .into_iter()
            .filter(|t| !matches!(t.kind, TokenKind::LeftParen | TokenKind::RightParen))
            .collect()
    })
}

fn normal_operator() -> impl Strategy<Value = Token> {
    prop_oneof![
        Just(mk_token(TokenKind::Plus, "+")),
        Just(mk_token(TokenKind::Multiply, "*")),
        Just(mk_token(TokenKind::Divide, "/")),
    ]
}

fn operator() -> impl Strategy<Value = Token> {
    prop_oneof![normal_operator(), Just(mk_token(TokenKind::Minus, "-"))]
}

/// Sources whose parentheses are balanced at every prefix
fn balanced_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![Just(String::new()), "[0-9]{1,2}", "[0-9][-+*/][0-9]"];
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("({})", s)),
            (inner.clone(), inner).prop_map(|(a, b)| format!("{}{}", a, b)),
        ]
    })
}

fn number_source() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,4}", "[0-9]{1,3}\\.[0-9]{1,3}"]
}

/// Well formed expressions: numbers, binary operators and parenthesized groups
fn expression_source() -> impl Strategy<Value = String> {
    number_source().prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("({})", e)),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "*-", "/-"]),
                number_source()
            )
                .prop_map(|(a, op, b)| format!("{}{}{}", a, op, b)),
            (inner.clone(), prop::sample::select(vec!["+", "-", "*", "/"]), inner)
                .prop_map(|(a, op, b)| format!("{}{}({})", a, op, b)),
        ]
    })
}

proptest! {
    #[test]
    fn balanced_parens_pass(source in balanced_source()) {
        prop_assert_eq!(check_parens(&tokenize(&source)), Ok(()));
    }

    #[test]
    fn negative_depth_is_a_missing_left_paren(source in balanced_source()) {
        let leading = format!("){}", source);
        prop_assert_eq!(
            check_parens(&tokenize(&leading)),
            Err(ValidityError::LeftParenShortage)
        );

        let trailing = format!("{})", source);
        prop_assert_eq!(
            check_parens(&tokenize(&trailing)),
            Err(ValidityError::LeftParenShortage)
        );
    }

    #[test]
    fn unclosed_paren_is_a_missing_right_paren(source in balanced_source()) {
        let unclosed = format!("{}(", source);
        prop_assert_eq!(
            check_parens(&tokenize(&unclosed)),
            Err(ValidityError::RightParenShortage)
        );

        let outer = format!("({}", source);
        prop_assert_eq!(
            check_parens(&tokenize(&outer)),
            Err(ValidityError::RightParenShortage)
        );
    }

    #[test]
    fn trailing_operator_is_rejected(mut tokens in token_stream(), op in operator()) {
        tokens.push(op);
        prop_assert_eq!(check_operators(&tokens), Err(ValidityError::OperatorInvalid));
    }

    #[test]
    fn trailing_operator_then_minus_is_rejected(mut tokens in token_stream(), op in operator()) {
        tokens.push(op);
        tokens.push(mk_token(TokenKind::Minus, "-"));
        prop_assert_eq!(check_operators(&tokens), Err(ValidityError::OperatorInvalid));
    }

    #[test]
    fn adjacent_normal_operators_are_rejected(
        tokens in flat_token_stream(),
        at in any::<prop::sample::Index>(),
        first in operator(),
        second in normal_operator(),
    ) {
        let mut tokens = tokens;
        let at = at.index(tokens.len() + 1);
        tokens.insert(at, second);
        tokens.insert(at, first);
        prop_assert_eq!(check(&tokens), Err(vec![ValidityError::OperatorInvalid]));
    }

    #[test]
    fn interior_dots_need_numeric_neighbours(tokens in token_stream()) {
        let expected_ok = tokens.len() < 3
            || (1..tokens.len() - 1).all(|i| {
                tokens[i].kind != TokenKind::Dot
                    || (tokens[i - 1].kind.is_number() && tokens[i + 1].kind.is_number())
            });
        prop_assert_eq!(check_dots(&tokens).is_ok(), expected_ok);
    }

    #[test]
    fn check_is_a_pure_function(tokens in token_stream()) {
        prop_assert_eq!(check(&tokens), check(&tokens));
    }

    #[test]
    fn failed_checks_report_exactly_one_kind(tokens in token_stream()) {
        if let Err(errors) = check(&tokens) {
            prop_assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn well_formed_expressions_check_and_parse(source in expression_source()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(check(&tokens), Ok(()), "rejected: {}", source);

        let tree = parse(&tokens);
        prop_assert!(tree.is_ok(), "failed to parse: {}", source);

        // the tree written back as text parses to the same tree
        let tree = tree.unwrap();
        let reparsed = parse(&tokenize(&tree.to_string()));
        prop_assert_eq!(reparsed, Ok(tree));
    }
}
