// File: src/config.rs
// Purpose: Configuration parsing from profile-form.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file looked up by [`FormConfig::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "profile-form.toml";

/// Form configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Validation behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Treat whitespace-only text as empty and ignore surrounding whitespace
    /// when measuring length (default: false)
    #[serde(default)]
    pub trim_whitespace: bool,
}

/// Submission logging
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubmitConfig {
    /// Pretty-print the submitted record in the log (default: false)
    #[serde(default)]
    pub pretty: bool,
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./profile-form.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
