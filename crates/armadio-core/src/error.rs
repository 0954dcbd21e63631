use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid season: {value} {location}")]
    InvalidSeason {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid item status: {value} {location}")]
    InvalidItemStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid locale: {value} {location}")]
    InvalidLocale {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid profile gender: {value} {location}")]
    InvalidProfileGender {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid subscription tier: {value} {location}")]
    InvalidSubscriptionTier {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid auth provider: {value} {location}")]
    InvalidAuthProvider {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
