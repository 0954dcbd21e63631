use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Garment season, fixed to the four Italian labels used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Season {
    #[default]
    Primavera,
    Estate,
    Autunno,
    Inverno,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primavera => "Primavera",
            Self::Estate => "Estate",
            Self::Autunno => "Autunno",
            Self::Inverno => "Inverno",
        }
    }

    pub const ALL: [Season; 4] = [
        Season::Primavera,
        Season::Estate,
        Season::Autunno,
        Season::Inverno,
    ];
}

impl FromStr for Season {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Primavera" => Ok(Self::Primavera),
            "Estate" => Ok(Self::Estate),
            "Autunno" => Ok(Self::Autunno),
            "Inverno" => Ok(Self::Inverno),
            _ => Err(CoreError::InvalidSeason {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
