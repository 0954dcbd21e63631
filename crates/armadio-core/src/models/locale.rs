use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// UI locale, one of the four supported language codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "JA")]
    Ja,
    #[serde(rename = "RU")]
    Ru,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::En => "EN",
            Self::Ja => "JA",
            Self::Ru => "RU",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "IT" => Ok(Self::It),
            "EN" => Ok(Self::En),
            "JA" => Ok(Self::Ja),
            "RU" => Ok(Self::Ru),
            _ => Err(CoreError::InvalidLocale {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
