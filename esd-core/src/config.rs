//! Directory configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tuning knobs for directory implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Hard cap on session ids returned by a single scan page (default: 256)
    pub max_scan_count: usize,

    /// Prefix for generated session ids (default: none)
    pub id_prefix: Option<String>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_scan_count: 256,
            id_prefix: None,
        }
    }
}

impl DirectoryConfig {
    /// Parse a configuration from a TOML document. Missing keys fall back to
    /// their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
