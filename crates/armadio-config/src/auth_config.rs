use crate::{ConfigError, ConfigErrorResult, DEFAULT_AUTH_ENABLED};

use serde::Deserialize;

/// Identity-provider settings. Disabled means guest-only local sessions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub enabled: bool,
    /// Base URL of the identity endpoint, e.g. the identitytoolkit REST root.
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_AUTH_ENABLED,
            endpoint: None,
            api_key: None,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.enabled {
            return Ok(());
        }

        match &self.endpoint {
            Some(endpoint) if !endpoint.is_empty() => {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    return Err(ConfigError::auth(
                        "auth.endpoint must be an http(s) URL",
                    ));
                }
            }
            _ => {
                return Err(ConfigError::auth(
                    "auth.endpoint is required when auth is enabled",
                ));
            }
        }

        if self.api_key.as_deref().unwrap_or_default().is_empty() {
            return Err(ConfigError::auth(
                "auth.api_key is required when auth is enabled",
            ));
        }

        Ok(())
    }
}
