#![allow(dead_code)]

use armadio_config::SyncConfig;
use armadio_core::{AuthProvider, AuthUser, Item, Season};
use armadio_store::{
    DocumentStore, EventBus, LocalCache, LocalStorage, PreferencesStore, SqliteDocumentStore,
    StoreError, UserProfileStore, WardrobeStore, WriteBatch,
};
use armadio_sync::SyncSession;

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde_json::{Map, Value};
use tempfile::TempDir;

/// Document-store decorator counting writes, with commit-failure injection
pub struct CountingStore {
    inner: SqliteDocumentStore,
    commits: AtomicUsize,
    merges: AtomicUsize,
    updates: AtomicUsize,
    fail_commits: AtomicBool,
}

impl CountingStore {
    pub fn new(inner: SqliteDocumentStore) -> Self {
        Self {
            inner,
            commits: AtomicUsize::new(0),
            merges: AtomicUsize::new(0),
            updates: AtomicUsize::new(0),
            fail_commits: AtomicBool::new(false),
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// All writes that can touch the preference document
    pub fn write_count(&self) -> usize {
        self.merges.load(Ordering::SeqCst) + self.updates.load(Ordering::SeqCst)
    }

    pub fn set_fail_commits(&self, fail: bool) {
        self.fail_commits.store(fail, Ordering::SeqCst);
    }

    fn injected_failure() -> StoreError {
        StoreError::Io {
            path: PathBuf::from("injected-failure"),
            source: std::io::Error::other("injected commit failure"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn get(&self, path: &str) -> armadio_store::Result<Option<Map<String, Value>>> {
        self.inner.get(path).await
    }

    async fn update(&self, path: &str, fields: Map<String, Value>) -> armadio_store::Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(path, fields).await
    }

    async fn set_merge(&self, path: &str, fields: Map<String, Value>) -> armadio_store::Result<()> {
        self.merges.fetch_add(1, Ordering::SeqCst);
        self.inner.set_merge(path, fields).await
    }

    async fn commit(&self, batch: WriteBatch) -> armadio_store::Result<()> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(Self::injected_failure());
        }
        self.inner.commit(batch).await
    }

    async fn list_collection(
        &self,
        collection: &str,
    ) -> armadio_store::Result<Vec<(String, Map<String, Value>)>> {
        self.inner.list_collection(collection).await
    }

    async fn collection_is_empty(&self, collection: &str) -> armadio_store::Result<bool> {
        self.inner.collection_is_empty(collection).await
    }
}

/// Full local/remote stack for one test
pub struct TestHarness {
    pub dir: TempDir,
    pub cache: Arc<LocalCache>,
    pub store: Arc<CountingStore>,
    pub wardrobe: Arc<WardrobeStore>,
    pub preferences: Arc<PreferencesStore>,
    pub profiles: Arc<UserProfileStore>,
}

pub async fn create_harness() -> TestHarness {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cache = Arc::new(LocalCache::new(
        LocalStorage::new(dir.path()),
        EventBus::default(),
    ));
    let sqlite = SqliteDocumentStore::in_memory()
        .await
        .expect("Failed to create test store");
    let store = Arc::new(CountingStore::new(sqlite));
    let doc: Arc<dyn DocumentStore> = store.clone();

    TestHarness {
        dir,
        cache,
        store,
        wardrobe: Arc::new(WardrobeStore::new(doc.clone())),
        preferences: Arc::new(PreferencesStore::new(doc.clone())),
        profiles: Arc::new(UserProfileStore::new(doc)),
    }
}

/// Debounce windows shrunk so tests wait real milliseconds, not seconds.
pub fn short_windows() -> SyncConfig {
    SyncConfig {
        items_debounce_ms: 100,
        prefs_debounce_ms: 60,
    }
}

pub fn create_session(harness: &TestHarness, user: AuthUser) -> Arc<SyncSession> {
    SyncSession::new(
        user,
        harness.cache.clone(),
        harness.wardrobe.clone(),
        harness.preferences.clone(),
        harness.profiles.clone(),
        &short_windows(),
    )
}

pub fn create_test_user(uid: &str) -> AuthUser {
    AuthUser {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        picture: None,
        provider: AuthProvider::Google,
        uid: Some(uid.to_string()),
        tier: None,
    }
}

pub fn create_test_item(id: &str, category: &str) -> Item {
    Item {
        id: id.to_string(),
        ..Item::new(category, "Blu", Season::Estate)
    }
}
