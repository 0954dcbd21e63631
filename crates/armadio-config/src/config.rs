use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, StorageConfig,
    SyncConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ARMADIO_CONFIG_DIR env var, else use ./.armadio/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ARMADIO_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

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
    /// Priority: ARMADIO_CONFIG_DIR env var > ./.armadio/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ARMADIO_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".armadio"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.auth.validate()?;
        self.sync.validate()?;
        self.database.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    /// Get absolute path to the document database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the on-device cache directory.
    pub fn storage_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.data_dir))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  storage: {}", self.storage.data_dir);
        info!("  database: {}", self.database.path);
        info!(
            "  auth: {} ({})",
            if self.auth.enabled {
                "enabled"
            } else {
                "disabled"
            },
            self.auth.endpoint.as_deref().unwrap_or("no endpoint")
        );
        info!(
            "  sync: items {}ms, prefs {}ms",
            self.sync.items_debounce_ms, self.sync.prefs_debounce_ms
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Storage
        Self::apply_env_string("ARMADIO_STORAGE_DATA_DIR", &mut self.storage.data_dir);

        // Database
        Self::apply_env_string("ARMADIO_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_bool("ARMADIO_AUTH_ENABLED", &mut self.auth.enabled);
        Self::apply_env_option_string("ARMADIO_AUTH_ENDPOINT", &mut self.auth.endpoint);
        Self::apply_env_option_string("ARMADIO_AUTH_API_KEY", &mut self.auth.api_key);

        // Sync
        Self::apply_env_parse(
            "ARMADIO_SYNC_ITEMS_DEBOUNCE_MS",
            &mut self.sync.items_debounce_ms,
        );
        Self::apply_env_parse(
            "ARMADIO_SYNC_PREFS_DEBOUNCE_MS",
            &mut self.sync.prefs_debounce_ms,
        );

        // Logging
        Self::apply_env_parse("ARMADIO_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ARMADIO_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ARMADIO_LOG_FILE", &mut self.logging.file);
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
