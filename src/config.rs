//! Configuration types and validation for the analyzer
//! Author: kartik4091
//! Created: 2025-06-03

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Maximum characters of a free-text field copied into a finding
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100;

/// Characters of a network-indicator value echoed per hit
pub const DEFAULT_NETWORK_SNIPPET_LENGTH: usize = 50;

/// Largest accepted input (50 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 50 * 1024 * 1024;

/// Tunables for a comprehensive analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Truncation length for free-text finding data
    pub max_text_length: usize,
    /// Snippet length for network indicator hits
    pub network_snippet_length: usize,
    /// Inputs above this size are rejected before decoding
    pub max_image_bytes: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            network_snippet_length: DEFAULT_NETWORK_SNIPPET_LENGTH,
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl AnalyzerConfig {
    /// Loads a configuration from a YAML or JSON file, chosen by extension.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&raw)
                .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?,
            _ => serde_yaml::from_str(&raw)?,
        };
        config.validate()?;
        debug!(?config, "Loaded analyzer configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_text_length == 0 {
            return Err(Error::ConfigError("max_text_length must be at least 1".into()));
        }
        if self.network_snippet_length == 0 {
            return Err(Error::ConfigError(
                "network_snippet_length must be at least 1".into(),
            ));
        }
        if self.max_image_bytes == 0 {
            return Err(Error::ConfigError("max_image_bytes must be at least 1".into()));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max_text_length" => Some(self.max_text_length.to_string()),
            "network_snippet_length" => Some(self.network_snippet_length.to_string()),
            "max_image_bytes" => Some(self.max_image_bytes.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed: usize = value
            .parse()
            .map_err(|_| Error::ConfigError(format!("Invalid usize for {}: {}", key, value)))?;
        let mut updated = self.clone();
        match key {
            "max_text_length" => updated.max_text_length = parsed,
            "network_snippet_length" => updated.network_snippet_length = parsed,
            "max_image_bytes" => updated.max_image_bytes = parsed,
            _ => return Err(Error::ConfigError(format!("Unknown key: {}", key))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}
