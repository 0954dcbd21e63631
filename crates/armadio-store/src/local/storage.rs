use crate::{Result as StoreErrorResult, StoreError};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// On-device key/value storage: one JSON file per key under a root directory.
///
/// The durable fallback for every profile; reads never fail (missing or
/// malformed values read as absent), writes report errors for the caller to
/// swallow or surface.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Profile keys are emails/uids; '/' never appears but never trust it.
        let file = key.replace(['/', '\\'], "_");
        self.root.join(format!("{file}.json"))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    /// Reads and decodes a value; missing or malformed data reads as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = std::fs::read_to_string(self.path_for(key)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Reads the raw JSON value for callers doing tolerant per-field decode.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.get(key)
    }

    #[track_caller]
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StoreErrorResult<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            path: self.root.clone(),
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = self.path_for(key);
        let raw = serde_json::to_string(value)?;
        std::fs::write(&path, raw).map_err(|e| StoreError::Io {
            path,
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    pub fn remove(&self, key: &str) -> StoreErrorResult<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io {
                path,
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
