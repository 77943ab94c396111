use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COPY_NOTICE_MS, DEFAULT_ERROR_NOTICE_MS,
    DEFAULT_SUCCESS_NOTICE_MS, MAX_NOTICE_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// How long transient notices stay visible
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub success_ms: u64,
    pub copy_ms: u64,
    pub error_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_ms: DEFAULT_SUCCESS_NOTICE_MS,
            copy_ms: DEFAULT_COPY_NOTICE_MS,
            error_ms: DEFAULT_ERROR_NOTICE_MS,
        }
    }
}

impl NoticeConfig {
    pub fn success(&self) -> Duration {
        Duration::from_millis(self.success_ms)
    }

    pub fn copy(&self) -> Duration {
        Duration::from_millis(self.copy_ms)
    }

    pub fn error(&self) -> Duration {
        Duration::from_millis(self.error_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("success_ms", self.success_ms),
            ("copy_ms", self.copy_ms),
            ("error_ms", self.error_ms),
        ] {
            if value == 0 || value > MAX_NOTICE_MS {
                return Err(ConfigError::notice(format!(
                    "notices.{name} must be 1-{MAX_NOTICE_MS}, got {value}"
                )));
            }
        }
        Ok(())
    }
}
