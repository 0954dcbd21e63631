pub mod document;
pub mod error;
pub mod events;
pub mod image;
pub mod local;
pub mod remote;

pub use document::batch::WriteBatch;
pub use document::paths;
pub use document::sqlite::SqliteDocumentStore;
pub use document::store::DocumentStore;
pub use error::{Result, StoreError};
pub use events::{EventBus, StoreEvent};
pub use local::cache::LocalCache;
pub use local::storage::LocalStorage;
pub use remote::preferences_store::PreferencesStore;
pub use remote::reconciliation::ReconciliationContext;
pub use remote::user_profile_store::UserProfileStore;
pub use remote::wardrobe_store::{MigrationOutcome, WardrobeStore};
