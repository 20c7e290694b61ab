//! Expression tree
//!
//!     The parser produces a [Group] holding a flat, ordered run of [Node]s. Nested
//!     parentheses become nested groups; operators stay in place between their operands,
//!     so precedence (multiplicative before additive) and unary minus are left for the
//!     evaluator to resolve from operator identity and position.
//!
//!     The tree is immutable once built. Evaluation progress is kept apart from it in a
//!     [Resolution] table keyed by [NodePath].

pub mod error;
pub mod node;
pub mod resolution;

pub use error::ParseError;
pub use node::{AddOp, Group, MulOp, Node};
pub use resolution::{NodePath, Resolution};
