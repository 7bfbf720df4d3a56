//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ModscanErrorCode};

/// Errors that can occur while walking the source tree or reading files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8: {path}")]
    InvalidUtf8 { path: PathBuf },
}

impl ModscanErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => error_code::ROOT_NOT_FOUND,
            _ => error_code::SCAN_ERROR,
        }
    }
}
