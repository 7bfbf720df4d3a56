//! modscan-core: foundation shared by the modscan crates.
//!
//! - Errors: one enum per subsystem, stable error codes
//! - Config: TOML-based, layered resolution
//! - Tracing: `MODSCAN_LOG`-driven subscriber setup
//! - Constants: sentinel identifiers embedded by module authors

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{ConfigOverrides, DiscoveryConfig, ModscanConfig};
pub use errors::{
    ConfigError, DiscoveryError, ModscanErrorCode, ParseError, RequirementsError, ScanError,
};
