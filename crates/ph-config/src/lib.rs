mod cache_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod notice_config;
mod seed_config;
mod store_config;

#[cfg(test)]
mod tests;

pub use cache_config::CacheConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notice_config::NoticeConfig;
pub use seed_config::{SeedConfig, SeedLocation};
pub use store_config::StoreConfig;

const CONFIG_DIR_ENV: &str = "PH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ph";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_STORE_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SEED_LOCATION: &str = "http://localhost:3000/db.json";

const DEFAULT_CACHE_DIR: &str = "cache";

const DEFAULT_SUCCESS_NOTICE_MS: u64 = 3_000;
const DEFAULT_COPY_NOTICE_MS: u64 = 2_000;
const DEFAULT_ERROR_NOTICE_MS: u64 = 5_000;
const MAX_NOTICE_MS: u64 = 60_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
