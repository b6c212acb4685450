// src/config/file.rs
// File-based site settings (TOML)

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Top-level config structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub chat: ChatSection,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct SiteSection {
    /// Overrides the owner name used in page titles
    pub owner: Option<String>,
    /// Prefix for generated links when the site is hosted under a sub-path
    pub base_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct ChatSection {
    /// Simulated "typing" delay before the assistant answers
    pub delay_ms: Option<u64>,
}

impl SiteConfig {
    /// Load settings from `path`; a missing or malformed file yields defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded site config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse site config file");
                    Self::default()
                }
            },
            Err(_) => {
                warn!(path = %path.display(), "Site config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
