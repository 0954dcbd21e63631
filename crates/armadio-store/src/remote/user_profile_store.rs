use crate::document::paths;
use crate::document::store::DocumentStore;
use crate::Result as StoreErrorResult;

use armadio_core::{AuthUser, SubscriptionTier};

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value, json};

/// Per-user profile document at `users/{uid}`.
pub struct UserProfileStore {
    store: Arc<dyn DocumentStore>,
}

impl UserProfileStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Mirrors the signed-in identity into the profile document. Local and
    /// uid-less sessions are skipped. New profiles start on the standard
    /// tier; existing ones keep whatever tier they already have.
    pub async fn upsert_from_auth(&self, user: &AuthUser) -> StoreErrorResult<()> {
        let Some(uid) = user.sync_uid() else {
            return Ok(());
        };
        let doc = paths::user_doc(uid);

        let mut fields = Map::new();
        fields.insert("displayName".to_string(), json!(user.name));
        fields.insert("email".to_string(), json!(user.email));
        fields.insert("photoUrl".to_string(), json!(user.picture));
        fields.insert("providerId".to_string(), json!(user.provider.as_str()));
        fields.insert("updatedAt".to_string(), json!(Utc::now()));

        match self.store.update(&doc, fields.clone()).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                fields.insert(
                    "tier".to_string(),
                    json!(SubscriptionTier::Standard.as_str()),
                );
                fields.insert("createdAt".to_string(), json!(Utc::now()));
                self.store.set_merge(&doc, fields).await
            }
            Err(e) => Err(e),
        }
    }

    /// Unknown or missing tier values fall back to standard.
    pub async fn load_tier(&self, uid: &str) -> StoreErrorResult<SubscriptionTier> {
        let tier = self
            .store
            .get(&paths::user_doc(uid))
            .await?
            .as_ref()
            .and_then(|data| data.get("tier"))
            .and_then(Value::as_str)
            .and_then(|s| SubscriptionTier::from_str(s).ok())
            .unwrap_or_default();
        Ok(tier)
    }
}
