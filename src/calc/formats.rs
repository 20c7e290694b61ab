//! Output formats for tokens and expression trees.
//!
//!     - simple: token literals separated by spaces, or the tree written back as infix text
//!     - treeviz: one line per node, see [treeviz]
//!     - json / yaml: serde serialization of the same data

pub mod simple;
pub mod treeviz;

pub use simple::{tokens_to_simple_str, tree_to_simple_str};
pub use treeviz::to_treeviz_str;
