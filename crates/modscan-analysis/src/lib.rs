//! modscan-analysis: static discovery of Python modules.
//!
//! Nothing here imports or executes the files it inspects. Each file is parsed
//! with tree-sitter and its top level is inspected syntactically:
//! - Scanner: sorted `.py` file enumeration, symlinks skipped
//! - Parsers: tree-sitter lowering into a small typed syntax tree
//! - Discovery: naming, exclusion, opt-out, `REQUIRES` extraction, records

pub mod discovery;
pub mod parsers;
pub mod scanner;

pub use discovery::{
    Diagnostic, DiagnosticKind, DiscoveryReport, ModuleDiscovery, ModuleRecord, ModuleStream,
    Requires,
};
pub use parsers::{ModuleAst, PythonParser};
