use crate::models::locale::Locale;
use crate::models::profile_gender::ProfileGender;

use serde::{Deserialize, Serialize};

/// Fallback category list for profiles that never customized theirs.
pub const DEFAULT_CATEGORIES: [&str; 5] =
    ["Maglietta", "Felpa", "Pantaloni", "Giacca", "Cappotto"];

/// Per-user preferences, each field independently optional.
///
/// `None` means "unset": the reader falls back to the local default. A value
/// with only some fields set doubles as a patch for the remote document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirm_delete: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hover_info: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_gender: Option<ProfileGender>,
}

impl UserPreferences {
    /// Overwrites only the fields the patch sets.
    pub fn merge(&mut self, patch: &UserPreferences) {
        if patch.locale.is_some() {
            self.locale = patch.locale;
        }
        if patch.confirm_delete.is_some() {
            self.confirm_delete = patch.confirm_delete;
        }
        if patch.show_hover_info.is_some() {
            self.show_hover_info = patch.show_hover_info;
        }
        if patch.categories.is_some() {
            self.categories = patch.categories.clone();
        }
        if patch.profile_gender.is_some() {
            self.profile_gender = patch.profile_gender;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.locale.is_none()
            && self.confirm_delete.is_none()
            && self.show_hover_info.is_none()
            && self.categories.is_none()
            && self.profile_gender.is_none()
    }

    pub fn default_categories() -> Vec<String> {
        DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
    }
}
