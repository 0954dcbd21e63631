use crate::{ConfigError, ConfigErrorResult, DEFAULT_ITEMS_DEBOUNCE_MS, DEFAULT_PREFS_DEBOUNCE_MS};

use std::time::Duration;

use serde::Deserialize;

/// Debounce windows for the remote-save coalescing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub items_debounce_ms: u64,
    pub prefs_debounce_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            items_debounce_ms: DEFAULT_ITEMS_DEBOUNCE_MS,
            prefs_debounce_ms: DEFAULT_PREFS_DEBOUNCE_MS,
        }
    }
}

impl SyncConfig {
    pub fn items_debounce(&self) -> Duration {
        Duration::from_millis(self.items_debounce_ms)
    }

    pub fn prefs_debounce(&self) -> Duration {
        Duration::from_millis(self.prefs_debounce_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.items_debounce_ms == 0 {
            return Err(ConfigError::sync("sync.items_debounce_ms must be > 0"));
        }
        if self.prefs_debounce_ms == 0 {
            return Err(ConfigError::sync("sync.prefs_debounce_ms must be > 0"));
        }
        Ok(())
    }
}
