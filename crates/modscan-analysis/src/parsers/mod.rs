//! Tree-sitter parser subsystem: Python grammar, typed top-level syntax.

pub mod error_tolerant;
pub mod literal;
pub mod python;
pub mod syntax;
pub mod validation;

pub use python::PythonParser;
pub use syntax::{Alias, CollectionKind, Expr, ModuleAst, Stmt, Target};
