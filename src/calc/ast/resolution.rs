//! Evaluation progress, kept outside the tree.
//!
//! A [NodePath] names a node by the child indices leading to it from the root group. The
//! evaluator marks paths in a [Resolution] as it reduces them to single values; the parser
//! never touches it, and a fresh table treats every node as unresolved.

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Child indices from the root group down to a node. `[0, 2]` is the third child of the
/// first child of the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The root group itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

/// Which nodes the evaluator has already reduced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    resolved: HashSet<NodePath>,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_resolved(&self, path: &NodePath) -> bool {
        self.resolved.contains(path)
    }

    /// Returns `false` if the path was already marked.
    pub fn mark_resolved(&mut self, path: NodePath) -> bool {
        self.resolved.insert(path)
    }

    pub fn resolved_count(&self) -> usize {
        self.resolved.len()
    }

    pub fn clear(&mut self) {
        self.resolved.clear();
    }
}
