//! Node types

use super::resolution::NodePath;
use serde::Serialize;
use std::fmt;

/// `*` or `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MulOp {
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl MulOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            MulOp::Multiply => "*",
            MulOp::Divide => "/",
        }
    }
}

/// `+` or `-`. A `-` with no operand before it is a negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddOp {
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "-")]
    Minus,
}

impl AddOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            AddOp::Plus => "+",
            AddOp::Minus => "-",
        }
    }
}

/// One element of a group's child sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// A parenthesized sub-expression.
    Group(Group),
    MultiplicativeOp(MulOp),
    AdditiveOp(AddOp),
    Literal(f64),
}

impl Node {
    pub fn is_operator(&self) -> bool {
        matches!(self, Node::MultiplicativeOp(_) | Node::AdditiveOp(_))
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Node::Literal(value) => Some(*value),
            _ => None,
        }
    }

    /// Short name of the variant, used by formatters.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Group(_) => "Group",
            Node::MultiplicativeOp(_) => "MultiplicativeOp",
            Node::AdditiveOp(_) => "AdditiveOp",
            Node::Literal(_) => "Literal",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Group(group) => write!(f, "({})", group),
            Node::MultiplicativeOp(op) => write!(f, "{}", op.symbol()),
            Node::AdditiveOp(op) => write!(f, "{}", op.symbol()),
            Node::Literal(value) => write!(f, "{}", value),
        }
    }
}

/// An ordered run of nodes. The root of every parse is a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Group {
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Follow `path` down from this group. The empty path is not a node and yields `None`.
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        let (first, rest) = path.indices().split_first()?;
        let mut node = self.children.get(*first)?;
        for index in rest {
            node = node.as_group()?.children.get(*index)?;
        }
        Some(node)
    }

    /// Paths of every node in the tree, parents before their children.
    pub fn paths(&self) -> Vec<NodePath> {
        let mut out = Vec::new();
        collect_paths(self, &NodePath::root(), &mut out);
        out
    }

    /// Deepest group nesting below this group; a group with no nested groups is 0.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .filter_map(Node::as_group)
            .map(|group| group.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

fn collect_paths(group: &Group, prefix: &NodePath, out: &mut Vec<NodePath>) {
    for (index, child) in group.children.iter().enumerate() {
        let path = prefix.child(index);
        out.push(path.clone());
        if let Node::Group(nested) = child {
            collect_paths(nested, &path, out);
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", child)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Group {
        // (1 + 2) * 3
        Group::new(vec![
            Node::Group(Group::new(vec![
                Node::Literal(1.0),
                Node::AdditiveOp(AddOp::Plus),
                Node::Literal(2.0),
            ])),
            Node::MultiplicativeOp(MulOp::Multiply),
            Node::Literal(3.0),
        ])
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "(1 + 2) * 3");
        assert_eq!(Node::Literal(0.5).to_string(), "0.5");
    }

    #[test]
    fn test_node_at() {
        let group = sample();
        assert_eq!(
            group.node_at(&NodePath::new(vec![0, 2])),
            Some(&Node::Literal(2.0))
        );
        assert_eq!(
            group.node_at(&NodePath::new(vec![1])),
            Some(&Node::MultiplicativeOp(MulOp::Multiply))
        );
        assert_eq!(group.node_at(&NodePath::root()), None);
        assert_eq!(group.node_at(&NodePath::new(vec![2, 0])), None);
        assert_eq!(group.node_at(&NodePath::new(vec![7])), None);
    }

    #[test]
    fn test_paths_visit_every_node() {
        let paths = sample().paths();
        let expected: Vec<NodePath> = vec![
            NodePath::new(vec![0]),
            NodePath::new(vec![0, 0]),
            NodePath::new(vec![0, 1]),
            NodePath::new(vec![0, 2]),
            NodePath::new(vec![1]),
            NodePath::new(vec![2]),
        ];
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_depth() {
        assert_eq!(Group::default().depth(), 0);
        assert_eq!(sample().depth(), 1);
        let nested = Group::new(vec![Node::Group(sample())]);
        assert_eq!(nested.depth(), 2);
    }

    #[test]
    fn test_serializes_operators_as_symbols() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"children":[{"Group":{"children":[{"Literal":1.0},{"AdditiveOp":"+"},{"Literal":2.0}]}},{"MultiplicativeOp":"*"},{"Literal":3.0}]}"#
        );
    }
}
