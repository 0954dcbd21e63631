use crate::state::SyncState;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Illegal sync transition: {from} -> {to} {location}")]
    IllegalTransition {
        from: SyncState,
        to: SyncState,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: armadio_store::StoreError,
        location: ErrorLocation,
    },
}

impl From<armadio_store::StoreError> for SyncError {
    #[track_caller]
    fn from(source: armadio_store::StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
