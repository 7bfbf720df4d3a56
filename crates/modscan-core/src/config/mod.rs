//! Configuration system for modscan.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod discovery_config;
pub mod modscan_config;

pub use discovery_config::DiscoveryConfig;
pub use modscan_config::{ConfigOverrides, ModscanConfig};
