use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to an uploaded garment photo.
///
/// Produced by the image-host collaborator and treated as opaque by the rest
/// of the system; unknown provider values are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResource {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

impl ImageResource {
    /// Wraps a bare URL carried over from the pre-upload data shape.
    pub fn legacy(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            provider: "legacy".to_string(),
            provider_id: None,
            delete_url: None,
            uploaded_at: None,
        }
    }
}
