use crate::document::batch::WriteBatch;
use crate::document::paths;
use crate::document::store::DocumentStore;
use crate::remote::reconciliation::ReconciliationContext;
use crate::{Result as StoreErrorResult, StoreError};

use armadio_core::Item;

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value, json};

/// Outcome of the one-time local-to-remote migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationOutcome {
    pub migrated: bool,
}

/// Remote wardrobe collection, one document per item under
/// `users/{uid}/wardrobe/{id}`.
pub struct WardrobeStore {
    store: Arc<dyn DocumentStore>,
}

impl WardrobeStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Loads the full collection and resets the reconciliation baseline to
    /// the ids actually present remotely.
    pub async fn load(
        &self,
        uid: &str,
        ctx: &mut ReconciliationContext,
    ) -> StoreErrorResult<Vec<Item>> {
        let docs = self
            .store
            .list_collection(&paths::wardrobe_collection(uid))
            .await
            .inspect_err(|e| log::warn!("[remote] wardrobe load failed for {uid}: {e}"))?;

        ctx.reset(docs.iter().map(|(id, _)| id.clone()));

        Ok(docs
            .iter()
            .map(|(id, data)| Item::from_document(id, data))
            .collect())
    }

    /// Writes the item list as one atomic batch: upserts for every deduped
    /// item, deletes for every id in the baseline no longer present. The
    /// baseline is updated only after the commit succeeds.
    pub async fn save(
        &self,
        uid: &str,
        items: &[Item],
        ctx: &mut ReconciliationContext,
    ) -> StoreErrorResult<()> {
        let unique = Item::dedupe_by_id(items);
        let current_ids: HashSet<String> = unique.iter().map(|i| i.id.clone()).collect();

        let mut batch = WriteBatch::new();

        // Deletes for items removed locally, only where a baseline exists.
        for id in ctx.known_ids() {
            if !current_ids.contains(id) {
                batch.delete(paths::wardrobe_doc(uid, id));
            }
        }

        for item in &unique {
            let mut payload = item_fields(item)?;
            payload.insert("updatedAt".to_string(), json!(Utc::now().date_naive()));
            if !ctx.knows(&item.id) {
                payload.insert("createdAt".to_string(), json!(Utc::now()));
            }
            batch.set_merge(paths::wardrobe_doc(uid, &item.id), payload);
        }

        self.store
            .commit(batch)
            .await
            .inspect_err(|e| log::warn!("[remote] wardrobe save failed for {uid}: {e}"))?;

        ctx.reset(current_ids);
        Ok(())
    }

    /// One-time migration of local-only items, guarded by a bounded
    /// emptiness check so it can never duplicate an existing collection.
    pub async fn migrate_if_needed(
        &self,
        uid: &str,
        local_items: &[Item],
        ctx: &mut ReconciliationContext,
    ) -> StoreErrorResult<MigrationOutcome> {
        let collection = paths::wardrobe_collection(uid);

        if !self.store.collection_is_empty(&collection).await? {
            return Ok(MigrationOutcome { migrated: false });
        }

        let unique = Item::dedupe_by_id(local_items);
        if unique.is_empty() {
            return Ok(MigrationOutcome { migrated: false });
        }

        // No baseline: every migrated item counts as new.
        ctx.clear();
        self.save(uid, &unique, ctx).await?;

        // Double-check at least one document landed.
        let migrated = !self.store.collection_is_empty(&collection).await?;
        Ok(MigrationOutcome { migrated })
    }
}

fn item_fields(item: &Item) -> StoreErrorResult<Map<String, Value>> {
    match serde_json::to_value(item)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization {
            source: serde::de::Error::custom(format!("item serialized to {other}")),
            location: error_location::ErrorLocation::from(std::panic::Location::caller()),
        }),
    }
}
