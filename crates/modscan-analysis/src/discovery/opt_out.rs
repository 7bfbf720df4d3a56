//! Detection of the "not a module" marker.

use modscan_core::constants::NOT_MODULE_MARKER;

use crate::parsers::syntax::{Alias, ModuleAst, Stmt};

/// True if a top-level statement defines or imports the marker name.
///
/// Only the syntactic position matters: `__NOT_HPI_MODULE__ = False` still
/// opts out. Nested blocks are not searched.
pub fn is_opted_out(ast: &ModuleAst) -> bool {
    ast.body.iter().any(binds_marker)
}

fn binds_marker(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::FunctionDef { name } | Stmt::ClassDef { name } => name == NOT_MODULE_MARKER,
        Stmt::Assign { targets, .. } => targets.iter().any(|t| t.is_name(NOT_MODULE_MARKER)),
        Stmt::AnnAssign { target, .. } => target.is_name(NOT_MODULE_MARKER),
        Stmt::Import { names } | Stmt::ImportFrom { names, .. } => {
            names.iter().any(mentions_marker)
        }
        Stmt::Other => false,
    }
}

fn mentions_marker(alias: &Alias) -> bool {
    alias.name == NOT_MODULE_MARKER || alias.asname.as_deref() == Some(NOT_MODULE_MARKER)
}
