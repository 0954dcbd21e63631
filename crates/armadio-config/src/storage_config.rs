use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_DIRECTORY};

use serde::Deserialize;

/// On-device cache location, relative to the config directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::from(DEFAULT_STORAGE_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if std::path::Path::new(&self.data_dir).is_absolute() || self.data_dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.data_dir must be relative and cannot contain '..'",
            ));
        }
        Ok(())
    }
}
