use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, CacheConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, NoticeConfig, SeedConfig, StoreConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub seed: SeedConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
    pub notices: NoticeConfig,

    /// Directory the config was loaded from
    #[serde(skip)]
    pub config_dir: PathBuf,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for PH_CONFIG_DIR env var, else use ./.ph/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply PH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Load config from an explicit directory, with the same steps as `load()`.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.config_dir = config_dir.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: PH_CONFIG_DIR env var > ./.ph/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.store.validate()?;
        self.seed.validate()?;
        self.cache.validate()?;
        self.notices.validate()?;
        Ok(())
    }

    /// Absolute path of the experience cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.config_dir.join(&self.cache.dir)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.config_dir.display());
        info!(
            "  store: {} (timeout {}s)",
            self.store.base_url, self.store.timeout_secs
        );
        info!("  seed: {}", self.seed.location);
        info!("  cache: {}", self.cache_dir().display());
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stderr")
        );
        info!(
            "  notices: success={}ms, copy={}ms, error={}ms",
            self.notices.success_ms, self.notices.copy_ms, self.notices.error_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Store
        Self::apply_env_string("PH_STORE_URL", &mut self.store.base_url);
        Self::apply_env_parse("PH_STORE_TIMEOUT_SECS", &mut self.store.timeout_secs);

        // Seed
        Self::apply_env_string("PH_SEED_LOCATION", &mut self.seed.location);

        // Cache
        Self::apply_env_string("PH_CACHE_DIR", &mut self.cache.dir);

        // Logging
        Self::apply_env_parse("PH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PH_LOG_FILE", &mut self.logging.file);

        // Notices
        Self::apply_env_parse("PH_NOTICE_SUCCESS_MS", &mut self.notices.success_ms);
        Self::apply_env_parse("PH_NOTICE_COPY_MS", &mut self.notices.copy_ms);
        Self::apply_env_parse("PH_NOTICE_ERROR_MS", &mut self.notices.error_ms);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
