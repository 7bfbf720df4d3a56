//! Requirements declaration errors.

use super::error_code::{self, ModscanErrorCode};

/// A `REQUIRES` declaration that is not a collection of string literals.
///
/// Recovered per file: the module is still reported, without requirements.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequirementsError {
    #[error("Expecting string constants only in {var} declaration, element {index} is {kind}")]
    NonStringElement {
        var: &'static str,
        index: usize,
        kind: String,
    },
}

impl ModscanErrorCode for RequirementsError {
    fn error_code(&self) -> &'static str {
        error_code::REQUIREMENTS_ERROR
    }
}
