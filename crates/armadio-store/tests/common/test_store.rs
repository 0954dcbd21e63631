use std::sync::Arc;

use armadio_store::SqliteDocumentStore;

/// Creates an in-memory document store with migrations run
pub async fn create_test_store() -> Arc<SqliteDocumentStore> {
    let store = SqliteDocumentStore::in_memory()
        .await
        .expect("Failed to create test store");
    Arc::new(store)
}
