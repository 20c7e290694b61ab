//! Parser
//!
//!     Turns a token stream into an expression tree with a single recursive pass. Each
//!     nesting level owns one accumulator of child nodes:
//!
//!         - a number appends a literal (`number . number` runs become one literal);
//!         - `(` parses a nested group on the rest of the stream and appends it, scanning
//!           resumes right after the matching `)`;
//!         - `)` closes the current level and hands its group back to the caller;
//!         - operators append operator nodes in place;
//!         - the end of the stream closes the root.
//!
//!     The input is expected to have passed the validity checker. Anything that would leave
//!     the tree inconsistent is still reported as a [ParseError](crate::calc::ast::ParseError)
//!     rather than silently accepted.

pub mod parser;

pub use parser::{parse, Parser, DEFAULT_MAX_DEPTH, MAX_DEPTH_CEILING};
