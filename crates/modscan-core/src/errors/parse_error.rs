//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ModscanErrorCode};

/// Errors that can occur during file parsing.
///
/// Any of these aborts a discovery pass: a file that cannot be parsed means
/// the tree as a whole cannot be trusted.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar not found for language: {language}: {message}")]
    GrammarNotFound { language: String, message: String },

    /// The file is not valid Python 3. `line` and `column` are 1-based.
    #[error("Syntax error in {path} at {line}:{column}: {reason}")]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        reason: String,
    },

    #[error("Tree-sitter produced no tree for {path}")]
    ParserFailed { path: PathBuf },
}

impl ModscanErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarNotFound { .. } => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
