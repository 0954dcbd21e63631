use crate::GUEST_PROFILE_KEY;
use crate::models::auth_provider::AuthProvider;
use crate::models::subscription_tier::SubscriptionTier;

use serde::{Deserialize, Serialize};

/// Normalized user record yielded by the auth collaborator.
///
/// Created on successful sign-in, replaced wholesale on auth-state change,
/// discarded on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    pub provider: AuthProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SubscriptionTier>,
}

impl AuthUser {
    /// Guest fallback used when no identity endpoint is configured.
    pub fn guest() -> Self {
        Self {
            name: "Ospite".to_string(),
            email: "guest@example.com".to_string(),
            picture: None,
            provider: AuthProvider::Local,
            uid: None,
            tier: None,
        }
    }

    /// Key namespacing the on-device cache: email, else uid, else "guest".
    pub fn profile_key(&self) -> String {
        if !self.email.is_empty() {
            return self.email.clone();
        }
        match &self.uid {
            Some(uid) if !uid.is_empty() => uid.clone(),
            _ => GUEST_PROFILE_KEY.to_string(),
        }
    }

    /// The uid to sync under, or `None` for local/anonymous accounts which
    /// stay on-device only.
    pub fn sync_uid(&self) -> Option<&str> {
        if self.provider == AuthProvider::Local {
            return None;
        }
        self.uid.as_deref().filter(|uid| !uid.is_empty())
    }
}
