//! Top-level discovery errors.

use super::error_code::{self, ModscanErrorCode};
use super::{ConfigError, ParseError, ScanError};

/// Errors that abort a discovery pass or a lookup.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("No such module: {name}")]
    ModuleNotFound { name: String },
}

impl ModscanErrorCode for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::ModuleNotFound { .. } => error_code::MODULE_NOT_FOUND,
        }
    }
}
