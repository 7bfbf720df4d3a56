//! Discovery configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the discovery engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Directory whose `.py` files are discovered. Its own name becomes the
    /// root namespace of every canonical module name (e.g. `my`).
    pub root: Option<PathBuf>,
}

impl DiscoveryConfig {
    /// Returns the configured root, if any.
    pub fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }
}
