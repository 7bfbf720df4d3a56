//! Python 3 rules tree-sitter-python does not enforce.
//!
//! The grammar still accepts Python 2 `print` and `exec` statements and lexes
//! string tokens loosely, so an error-free tree can hold code the interpreter
//! refuses to compile.

use tree_sitter::{Node, Point};

use super::literal::{self, Literal, LiteralError};

/// First rule broken, with its 0-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub position: Point,
    pub reason: String,
}

/// Walk the whole tree, nested blocks included, and report the first
/// violation in source order.
pub fn first_violation(root: Node<'_>, source: &str) -> Option<Violation> {
    let mut cursor = root.walk();
    loop {
        if let Some(violation) = check(cursor.node(), source) {
            return Some(violation);
        }
        if cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn check(node: Node<'_>, source: &str) -> Option<Violation> {
    match node.kind() {
        "print_statement" => Some(Violation {
            position: node.start_position(),
            reason: "Python 2 print statement".to_string(),
        }),
        "exec_statement" => Some(Violation {
            position: node.start_position(),
            reason: "Python 2 exec statement".to_string(),
        }),
        "string" => check_string(node, source),
        "concatenated_string" => check_concatenation(node, source),
        _ => None,
    }
}

fn check_string(node: Node<'_>, source: &str) -> Option<Violation> {
    let token = source.get(node.byte_range())?;
    match literal::evaluate(token) {
        Ok(Literal::Formatted) => check_formatted(node, token, source),
        Ok(_) => None,
        Err(error) => Some(violation_in(node.start_position(), token, error)),
    }
}

/// Literal parts of an f-string follow `str` escape rules; interpolations
/// are visited as ordinary nodes.
fn check_formatted(node: Node<'_>, token: &str, source: &str) -> Option<Violation> {
    let (prefix, _) = literal::split_prefix(token).ok()?;
    if prefix.raw {
        return None;
    }
    let mut cursor = node.walk();
    let parts: Vec<Node<'_>> = node
        .children(&mut cursor)
        .filter(|child| child.kind() == "string_content")
        .collect();
    parts.into_iter().find_map(|part| {
        let text = source.get(part.byte_range())?;
        literal::unescape(text)
            .err()
            .map(|error| violation_in(part.start_position(), text, error))
    })
}

/// `b'a' 'b'` cannot be concatenated.
fn check_concatenation(node: Node<'_>, source: &str) -> Option<Violation> {
    let mut cursor = node.walk();
    let kinds: Vec<bool> = node
        .named_children(&mut cursor)
        .filter(|part| part.kind() == "string")
        .filter_map(|part| source.get(part.byte_range()))
        .filter_map(|token| literal::split_prefix(token).ok())
        .map(|(prefix, _)| prefix.bytes)
        .collect();
    let mixed = kinds.iter().any(|&bytes| bytes) && kinds.iter().any(|&bytes| !bytes);
    mixed.then(|| Violation {
        position: node.start_position(),
        reason: "cannot mix bytes and nonbytes literals".to_string(),
    })
}

fn violation_in(start: Point, text: &str, error: LiteralError) -> Violation {
    let before = text.get(..error.offset).unwrap_or(text);
    let position = match before.rfind('\n') {
        Some(newline) => Point::new(
            start.row + before.matches('\n').count(),
            before.len() - newline - 1,
        ),
        None => Point::new(start.row, start.column + before.len()),
    };
    Violation {
        position,
        reason: error.to_string(),
    }
}
