use crate::Result as StoreErrorResult;
use crate::document::batch::WriteBatch;

use async_trait::async_trait;
use serde_json::{Map, Value};

/// The document-store collaborator.
///
/// Mirrors the surface the remote wrappers need: point reads, update of an
/// existing document, create-or-merge, an atomic multi-document commit,
/// collection listing, and a bounded existence check. Field merges are
/// shallow: a set field replaces the whole top-level value.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point read; `Ok(None)` when the document does not exist.
    async fn get(&self, path: &str) -> StoreErrorResult<Option<Map<String, Value>>>;

    /// Update-in-place; fails with `DocumentNotFound` when absent.
    async fn update(&self, path: &str, fields: Map<String, Value>) -> StoreErrorResult<()>;

    /// Create the document or merge the fields into the existing one.
    async fn set_merge(&self, path: &str, fields: Map<String, Value>) -> StoreErrorResult<()>;

    /// Commit every operation in the batch atomically.
    async fn commit(&self, batch: WriteBatch) -> StoreErrorResult<()>;

    /// All documents directly under a collection, as (id, data) pairs.
    async fn list_collection(
        &self,
        collection: &str,
    ) -> StoreErrorResult<Vec<(String, Map<String, Value>)>>;

    /// Bounded existence check (reads at most one document).
    async fn collection_is_empty(&self, collection: &str) -> StoreErrorResult<bool>;
}
