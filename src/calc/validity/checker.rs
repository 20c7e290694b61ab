//! The validity checker: runs the rules in order and keeps a record of failures.

use super::error::ValidityError;
use super::rules::{check_dots, check_operators, check_parens};
use crate::calc::token::{until_eof, Token};

/// Runs the structural rules over token streams.
///
/// Every failure is appended to an error log that persists across calls, so one checker
/// can be reused over several inputs and inspected afterwards. The result of a single
/// [check](ValidityChecker::check) call only depends on its input.
#[derive(Debug, Clone, Default)]
pub struct ValidityChecker {
    errors: Vec<ValidityError>,
}

impl ValidityChecker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run parenthesis balance, operator adjacency and decimal point rules, stopping at the
    /// first rule that fails.
    pub fn check(&mut self, tokens: &[Token]) -> Result<(), Vec<ValidityError>> {
        let tokens = until_eof(tokens);

        check_parens(tokens)
            .and_then(|_| check_operators(tokens))
            .and_then(|_| check_dots(tokens))
            .map_err(|error| {
                self.register(error);
                vec![error]
            })
    }

    /// Whether any check run by this checker has failed.
    pub fn error_occurred(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded failures, oldest first.
    pub fn errors(&self) -> &[ValidityError] {
        &self.errors
    }

    fn register(&mut self, error: ValidityError) {
        self.errors.push(error);
    }
}

/// Check a token stream with a fresh checker.
pub fn check(tokens: &[Token]) -> Result<(), Vec<ValidityError>> {
    ValidityChecker::new().check(tokens)
}
