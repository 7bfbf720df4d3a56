//! Shared constants for the modscan discovery engine.
//!
//! The sentinel identifiers are part of the contract with module authors, who
//! write them into their own source files. Changing any of them breaks every
//! dependent module.

/// modscan version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the top-level variable holding a module's requirements.
pub const REQUIRES_VAR: &str = "REQUIRES";

/// Marker name: a file that defines or imports it is not a module.
pub const NOT_MODULE_MARKER: &str = "__NOT_HPI_MODULE__";

/// File name that stands for its enclosing package.
pub const PACKAGE_INIT_FILE: &str = "__init__.py";

/// Extension of discoverable source files.
pub const SOURCE_EXTENSION: &str = "py";

/// Separator between components of a canonical module name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Project-level configuration file name.
pub const CONFIG_FILE_NAME: &str = "modscan.toml";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "MODSCAN_LOG";

/// Filter used when `MODSCAN_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "modscan=info";
