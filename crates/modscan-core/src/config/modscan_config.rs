//! Top-level modscan configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DiscoveryConfig;
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Environment variable overriding `discovery.root`.
pub const ROOT_ENV_VAR: &str = "MODSCAN_ROOT";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`MODSCAN_*`)
/// 3. Project config (`modscan.toml` in the project directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ModscanConfig {
    pub discovery: DiscoveryConfig,
}

/// Caller-supplied values that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root: Option<PathBuf>,
}

impl ModscanConfig {
    /// Load configuration for the project rooted at `project_dir`.
    pub fn load(
        project_dir: &Path,
        overrides: Option<&ConfigOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3 (lowest priority): project config
        let project_config_path = project_dir.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            tracing::debug!(path = %project_config_path.display(), "loading project config");
            Self::merge_toml_file(&mut config, &project_config_path)?;
            if let Some(root) = config.discovery.root.take() {
                config.discovery.root = Some(if root.is_relative() {
                    project_dir.join(root)
                } else {
                    root
                });
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        // Layer 1 (highest priority): explicit overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ModscanConfig) -> Result<(), ConfigError> {
        if let Some(root) = &config.discovery.root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "discovery.root".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ModscanConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: ModscanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ModscanConfig, other: &ModscanConfig) {
        if other.discovery.root.is_some() {
            base.discovery.root = other.discovery.root.clone();
        }
    }

    /// Apply environment variable overrides, read through `lookup`.
    fn apply_env_overrides<F>(config: &mut ModscanConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ROOT_ENV_VAR) {
            if !val.is_empty() {
                config.discovery.root = Some(PathBuf::from(val));
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut ModscanConfig, overrides: &ConfigOverrides) {
        if let Some(ref root) = overrides.root {
            config.discovery.root = Some(root.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
