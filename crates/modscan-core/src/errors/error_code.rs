//! ModscanErrorCode trait for structured error reporting.

/// Every error enum implements this to provide a stable, machine-readable
/// code string alongside its human-readable message.
pub trait ModscanErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const REQUIREMENTS_ERROR: &str = "REQUIREMENTS_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MODULE_NOT_FOUND: &str = "MODULE_NOT_FOUND";
