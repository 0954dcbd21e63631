pub mod debounce;
pub mod error;
pub mod handle;
pub mod session;
pub mod state;

pub use debounce::Debouncer;
pub use error::{Result, SyncError};
pub use handle::SyncHandle;
pub use session::SyncSession;
pub use state::SyncState;
