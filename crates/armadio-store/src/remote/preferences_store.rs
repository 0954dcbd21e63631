use crate::document::paths;
use crate::document::store::DocumentStore;
use crate::{Result as StoreErrorResult, StoreError};

use armadio_core::{Locale, ProfileGender, UserPreferences};

use std::str::FromStr;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value, json};

/// Remote preference document at `users/{uid}/settings/app`.
pub struct PreferencesStore {
    store: Arc<dyn DocumentStore>,
}

impl PreferencesStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// `None` when no preference document exists yet. Field-level
    /// validation: unknown locale/gender values and non-string categories
    /// are dropped rather than failing the load.
    pub async fn load(&self, uid: &str) -> StoreErrorResult<Option<UserPreferences>> {
        let Some(data) = self.store.get(&paths::preferences_doc(uid)).await? else {
            return Ok(None);
        };

        Ok(Some(UserPreferences {
            locale: data
                .get("locale")
                .and_then(Value::as_str)
                .and_then(|s| Locale::from_str(s).ok()),
            confirm_delete: data.get("confirmDelete").and_then(Value::as_bool),
            show_hover_info: data.get("showHoverInfo").and_then(Value::as_bool),
            categories: data.get("categories").and_then(Value::as_array).map(|a| {
                a.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            }),
            profile_gender: data
                .get("profileGender")
                .and_then(Value::as_str)
                .and_then(|s| ProfileGender::from_str(s).ok()),
        }))
    }

    /// Writes only the fields the patch sets. Update-in-place first; when
    /// the document does not exist yet, falls back to create-with-merge and
    /// additionally stamps `createdAt`.
    pub async fn save(&self, uid: &str, patch: &UserPreferences) -> StoreErrorResult<()> {
        let doc = paths::preferences_doc(uid);
        let mut fields = patch_fields(patch)?;
        fields.insert("updatedAt".to_string(), json!(Utc::now()));

        match self.store.update(&doc, fields.clone()).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => {
                fields.insert("createdAt".to_string(), json!(Utc::now()));
                self.store.set_merge(&doc, fields).await
            }
            Err(e) => {
                log::warn!("[remote] preference save failed for {uid}: {e}");
                Err(e)
            }
        }
    }
}

fn patch_fields(patch: &UserPreferences) -> StoreErrorResult<Map<String, Value>> {
    // Unset fields skip serialization, so this is exactly the patch.
    match serde_json::to_value(patch)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization {
            source: serde::de::Error::custom(format!("preferences serialized to {other}")),
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        }),
    }
}
