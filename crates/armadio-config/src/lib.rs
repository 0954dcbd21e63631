mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
pub mod logger;
mod storage_config;
mod sync_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::{LogLevel, UnknownLogLevel};
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;
pub use sync_config::SyncConfig;

const DEFAULT_DATABASE_FILENAME: &str = "armadio.db";
const DEFAULT_STORAGE_DIRECTORY: &str = "local";
const DEFAULT_AUTH_ENABLED: bool = false;
const DEFAULT_ITEMS_DEBOUNCE_MS: u64 = 900;
const DEFAULT_PREFS_DEBOUNCE_MS: u64 = 600;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
