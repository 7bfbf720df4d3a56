//! Error handling for modscan.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod discovery_error;
pub mod error_code;
pub mod parse_error;
pub mod requirements_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use discovery_error::DiscoveryError;
pub use error_code::ModscanErrorCode;
pub use parse_error::ParseError;
pub use requirements_error::RequirementsError;
pub use scan_error::ScanError;
