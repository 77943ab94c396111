use crate::{ConfigError, ConfigErrorResult, DEFAULT_SEED_LOCATION, store_config::is_http_url};

use std::path::PathBuf;

use serde::Deserialize;

/// Where the initial experience document lives
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// An http(s) URL or a local file path
    pub location: String,
}

/// Resolved seed location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedLocation {
    Url(String),
    File(PathBuf),
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            location: String::from(DEFAULT_SEED_LOCATION),
        }
    }
}

impl SeedConfig {
    pub fn location(&self) -> SeedLocation {
        let location = self.location.trim();
        if is_http_url(location) {
            SeedLocation::Url(location.to_string())
        } else {
            SeedLocation::File(PathBuf::from(location))
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.location.trim().is_empty() {
            return Err(ConfigError::seed("seed.location cannot be empty"));
        }
        Ok(())
    }
}
