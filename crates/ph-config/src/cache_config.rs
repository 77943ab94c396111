use crate::{ConfigError, ConfigErrorResult, DEFAULT_CACHE_DIR};

use serde::Deserialize;

/// Local durable storage for the experience list
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory relative to the config directory
    pub dir: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_CACHE_DIR),
        }
    }
}

impl CacheConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.dir);
        if self.dir.trim().is_empty() || path.is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::cache(
                "cache.dir must be a non-empty relative path and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
