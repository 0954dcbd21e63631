use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Garment lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ItemStatus {
    /// Ready to wear
    #[default]
    Ready,
    /// Needs mending before it goes back into rotation
    #[serde(rename = "Needs Repair")]
    NeedsRepair,
    /// Out of rotation, hidden from default views
    Archived,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::NeedsRepair => "Needs Repair",
            Self::Archived => "Archived",
        }
    }
}

impl FromStr for ItemStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Ready" => Ok(Self::Ready),
            "Needs Repair" => Ok(Self::NeedsRepair),
            "Archived" => Ok(Self::Archived),
            _ => Err(CoreError::InvalidItemStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
