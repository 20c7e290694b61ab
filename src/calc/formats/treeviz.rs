//! Treeviz formatter for expression trees
//!
//! One line per node, nesting encoded as indentation with 2 columns per level:
//!
//! <indentation>(per level) <connector> <icon> <label>
//!
//! Example, for `(1+2)*3`:
//!
//! ```text
//! ⧉ expression
//! ├─ ⊏ 3 nodes
//! │ ├─ # 1
//! │ ├─ ± +
//! │ └─ # 2
//! ├─ × *
//! └─ # 3
//! ```
//!
//! Icons
//!     Root: ⧉
//!     Group: ⊏
//!     Literal: #
//!     MultiplicativeOp: ×
//!     AdditiveOp: ±

use crate::calc::ast::{Group, Node};

/// Get the icon for a node type
fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Root" => "⧉",
        "Group" => "⊏",
        "Literal" => "#",
        "MultiplicativeOp" => "×",
        "AdditiveOp" => "±",
        _ => "○",
    }
}

fn label(node: &Node) -> String {
    match node {
        Node::Group(group) => count_label(group),
        Node::MultiplicativeOp(op) => op.symbol().to_string(),
        Node::AdditiveOp(op) => op.symbol().to_string(),
        Node::Literal(value) => value.to_string(),
    }
}

fn count_label(group: &Group) -> String {
    match group.len() {
        1 => "1 node".to_string(),
        n => format!("{} nodes", n),
    }
}

fn format_node(node: &Node, prefix: &str, child_index: usize, child_count: usize) -> String {
    let mut output = String::new();

    let is_last = child_index == child_count - 1;
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.node_type());

    output.push_str(&format!("{}{} {} {}\n", prefix, connector, icon, label(node)));

    if let Node::Group(group) = node {
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        output.push_str(&format_children(group, &child_prefix));
    }

    output
}

fn format_children(group: &Group, prefix: &str) -> String {
    let child_count = group.len();
    group
        .iter()
        .enumerate()
        .map(|(i, child)| format_node(child, prefix, i, child_count))
        .collect()
}

pub fn to_treeviz_str(root: &Group) -> String {
    let mut output = format!("{} expression\n", get_icon("Root"));
    output.push_str(&format_children(root, ""));
    output
}
