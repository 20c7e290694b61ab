//! Validity checking
//!
//!     Structural verification of a token stream before it reaches the parser. Three rules
//!     run in a fixed order and the first one to fail stops the whole check:
//!
//!         1. Parenthesis balance. See [rules::check_parens].
//!         2. Operator adjacency. See [rules::check_operators].
//!         3. Decimal points. See [rules::check_dots].
//!
//!     The checker is the only gate for structural errors: the parser assumes its input
//!     passed here and does not report these error kinds again.

pub mod checker;
pub mod error;
pub mod rules;

pub use checker::{check, ValidityChecker};
pub use error::ValidityError;
