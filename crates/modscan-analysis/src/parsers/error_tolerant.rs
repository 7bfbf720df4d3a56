//! Locate ERROR and MISSING nodes in a tree-sitter tree.
//!
//! Tree-sitter recovers from syntax errors instead of failing; discovery
//! treats any recovery as a failed parse, so it needs the count and the first
//! position.

use tree_sitter::{Node, Point};

/// Count ERROR/MISSING nodes and return the position of the first one.
pub fn first_error(root: Node) -> (u32, Option<Point>) {
    let mut count = 0u32;
    let mut first = None;
    collect_errors(root, &mut count, &mut first);
    (count, first)
}

fn collect_errors(node: Node, count: &mut u32, first: &mut Option<Point>) {
    if node.is_error() || node.is_missing() {
        *count += 1;
        if first.is_none() {
            *first = Some(node.start_position());
        }
    }
    // Subtrees without errors are skipped entirely.
    if !node.has_error() {
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_errors(child, count, first);
    }
}
