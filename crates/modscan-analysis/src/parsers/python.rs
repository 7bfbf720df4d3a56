//! Python parser using native tree-sitter.
//!
//! Lowers the top level of a tree-sitter-python tree into [`ModuleAst`].

use std::path::Path;

use modscan_core::errors::ParseError;
use tree_sitter::{Language, Node, Parser};

use super::error_tolerant::first_error;
use super::literal::{self, Literal};
use super::syntax::{Alias, CollectionKind, Expr, ModuleAst, Stmt, Target};
use super::validation::first_violation;

/// Python parser. Cheap to clone; a fresh tree-sitter `Parser` is created per
/// file so the adapter can be shared freely.
#[derive(Clone)]
pub struct PythonParser {
    language: Language,
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PythonParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PythonParser").finish_non_exhaustive()
    }
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Parse `source`. `path` is only used in error reports.
    ///
    /// Any ERROR or MISSING node in the tree is a [`ParseError::Syntax`], as
    /// is anything Python 3 would refuse to compile that the grammar lets
    /// through (see [`first_violation`]).
    pub fn parse(&self, source: &str, path: &Path) -> Result<ModuleAst, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::GrammarNotFound {
                language: "python".to_string(),
                message: e.to_string(),
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::ParserFailed {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();

        if root.has_error() {
            let (error_count, first) = first_error(root);
            let point = first.unwrap_or_else(|| root.start_position());
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: point.row + 1,
                column: point.column + 1,
                reason: format!("{error_count} unparseable region(s)"),
            });
        }
        if let Some(violation) = first_violation(root, source) {
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: violation.position.row + 1,
                column: violation.position.column + 1,
                reason: violation.reason,
            });
        }

        let statements = named_children(root);
        let docstring = statements.first().and_then(|first| docstring(*first, source));
        let body = statements
            .into_iter()
            .map(|node| lower_statement(node, source))
            .collect();

        Ok(ModuleAst { docstring, body })
    }
}

/// Named children minus comments, which tree-sitter attaches anywhere.
fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

fn text<'s>(node: Node<'_>, source: &'s str) -> &'s str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn docstring(first: Node<'_>, source: &str) -> Option<String> {
    if first.kind() != "expression_statement" {
        return None;
    }
    match named_children(first).as_slice() {
        [only] => match lower_expr(*only, source) {
            Expr::Str(doc) => Some(doc),
            _ => None,
        },
        _ => None,
    }
}

fn lower_statement(node: Node<'_>, source: &str) -> Stmt {
    match node.kind() {
        "expression_statement" => match named_children(node).as_slice() {
            [assignment] if assignment.kind() == "assignment" => {
                lower_assignment(*assignment, source)
            }
            _ => Stmt::Other,
        },
        "import_statement" => Stmt::Import {
            names: field_aliases(node, source),
        },
        "import_from_statement" => Stmt::ImportFrom {
            module: node
                .child_by_field_name("module_name")
                .filter(|module| module.kind() == "dotted_name")
                .map(|module| dotted_name(module, source)),
            names: field_aliases(node, source),
        },
        "future_import_statement" => Stmt::ImportFrom {
            module: Some("__future__".to_string()),
            names: field_aliases(node, source),
        },
        "function_definition" | "class_definition" => {
            let name = node
                .child_by_field_name("name")
                .map(|name| text(name, source).to_string())
                .unwrap_or_default();
            if node.kind() == "function_definition" {
                Stmt::FunctionDef { name }
            } else {
                Stmt::ClassDef { name }
            }
        }
        "decorated_definition" => node
            .child_by_field_name("definition")
            .map(|definition| lower_statement(definition, source))
            .unwrap_or(Stmt::Other),
        _ => Stmt::Other,
    }
}

/// `a = b = v` nests as `assignment(a, assignment(b, v))`; unroll it into
/// one statement with a target per `=`.
fn lower_assignment(node: Node<'_>, source: &str) -> Stmt {
    if node.child_by_field_name("type").is_some() {
        return match node.child_by_field_name("left") {
            Some(left) => Stmt::AnnAssign {
                target: lower_target(left, source),
                value: node
                    .child_by_field_name("right")
                    .map(|right| lower_expr(right, source)),
            },
            None => Stmt::Other,
        };
    }

    let mut targets = Vec::new();
    let mut current = node;
    loop {
        let Some(left) = current.child_by_field_name("left") else {
            return Stmt::Other;
        };
        targets.push(lower_target(left, source));
        match current.child_by_field_name("right") {
            Some(right) if right.kind() == "assignment" => current = right,
            Some(right) => {
                return Stmt::Assign {
                    targets,
                    value: lower_expr(right, source),
                }
            }
            None => return Stmt::Other,
        }
    }
}

fn lower_target(node: Node<'_>, source: &str) -> Target {
    match node.kind() {
        "identifier" => Target::Name(text(node, source).to_string()),
        // `(x) = v` binds the plain name `x`.
        "tuple_pattern" | "parenthesized_expression" if !has_comma(node) => {
            match named_children(node).as_slice() {
                [inner] => lower_target(*inner, source),
                _ => Target::Other,
            }
        }
        _ => Target::Other,
    }
}

fn has_comma(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == ",");
    found
}

fn lower_expr(node: Node<'_>, source: &str) -> Expr {
    match node.kind() {
        "string" => lower_string(node, source),
        "concatenated_string" => {
            let mut joined = String::new();
            for part in named_children(node) {
                match lower_string(part, source) {
                    Expr::Str(piece) => joined.push_str(&piece),
                    other => return other,
                }
            }
            Expr::Str(joined)
        }
        "list" => collection(CollectionKind::List, node, source),
        "set" => collection(CollectionKind::Set, node, source),
        "tuple" | "expression_list" => collection(CollectionKind::Tuple, node, source),
        "parenthesized_expression" => match named_children(node).as_slice() {
            [inner] => lower_expr(*inner, source),
            _ => Expr::Other { kind: node.kind() },
        },
        kind => Expr::Other { kind },
    }
}

fn lower_string(node: Node<'_>, source: &str) -> Expr {
    match literal::evaluate(text(node, source)) {
        Ok(Literal::Str(value)) => Expr::Str(value),
        Ok(Literal::Bytes) => Expr::Other { kind: "bytes" },
        Ok(Literal::Formatted) => Expr::Other { kind: "f-string" },
        Err(_) => Expr::Other { kind: node.kind() },
    }
}

fn collection(kind: CollectionKind, node: Node<'_>, source: &str) -> Expr {
    Expr::Collection {
        kind,
        elements: named_children(node)
            .into_iter()
            .map(|element| lower_expr(element, source))
            .collect(),
    }
}

fn field_aliases(node: Node<'_>, source: &str) -> Vec<Alias> {
    let mut cursor = node.walk();
    let names: Vec<Node<'_>> = node.children_by_field_name("name", &mut cursor).collect();
    names
        .into_iter()
        .filter_map(|name| match name.kind() {
            "dotted_name" => Some(Alias {
                name: dotted_name(name, source),
                asname: None,
            }),
            "aliased_import" => Some(Alias {
                name: name
                    .child_by_field_name("name")
                    .map(|inner| dotted_name(inner, source))
                    .unwrap_or_default(),
                asname: name
                    .child_by_field_name("alias")
                    .map(|alias| text(alias, source).to_string()),
            }),
            _ => None,
        })
        .collect()
}

fn dotted_name(node: Node<'_>, source: &str) -> String {
    let parts: Vec<&str> = named_children(node)
        .into_iter()
        .map(|part| text(part, source))
        .collect();
    if parts.is_empty() {
        text(node, source).to_string()
    } else {
        parts.join(".")
    }
}
