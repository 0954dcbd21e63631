use crate::events::{EventBus, StoreEvent};
use crate::local::storage::LocalStorage;

use armadio_core::{Item, Locale, ProfileGender, UserPreferences};

use serde_json::Value;

fn items_key(profile: &str) -> String {
    format!("items-{profile}")
}

fn confirm_key(profile: &str) -> String {
    format!("confirm-delete-{profile}")
}

fn hover_key(profile: &str) -> String {
    format!("hover-info-{profile}")
}

fn categories_key(profile: &str) -> String {
    format!("categories-{profile}")
}

fn gender_key(profile: &str) -> String {
    format!("profile-gender-{profile}")
}

fn avatar_key(profile: &str) -> String {
    format!("profile-avatar-{profile}")
}

/// App-wide language key; the locale is not namespaced per profile.
const LANG_KEY: &str = "lang";

/// Per-profile cache accessors over [`LocalStorage`].
///
/// Loads tolerate malformed or missing data by returning fixed defaults.
/// Saves are best-effort: failures are logged and swallowed, and every
/// successful write publishes a [`StoreEvent`] for mounted views.
pub struct LocalCache {
    storage: LocalStorage,
    bus: EventBus,
}

impl LocalCache {
    pub fn new(storage: LocalStorage, bus: EventBus) -> Self {
        Self { storage, bus }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    // ---------------------------------------------------------------- items

    pub fn load_items(&self, profile: &str) -> Vec<Item> {
        let Some(Value::Array(records)) = self.storage.get_value(&items_key(profile)) else {
            return Vec::new();
        };
        records.iter().filter_map(Item::from_local_value).collect()
    }

    pub fn save_items(&self, profile: &str, items: &[Item]) {
        match self.storage.set(&items_key(profile), &items) {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::ItemsUpdated {
                    items: items.to_vec(),
                },
            ),
            Err(e) => log::warn!("[cache] item save failed for {profile}: {e}"),
        }
    }

    // ---------------------------------------------------------- preferences

    pub fn load_confirm_delete(&self, profile: &str) -> bool {
        // Only a stored `false` turns the confirmation off.
        !matches!(self.storage.get::<bool>(&confirm_key(profile)), Some(false))
    }

    pub fn save_confirm_delete(&self, profile: &str, value: bool) {
        match self.storage.set(&confirm_key(profile), &value) {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::PreferencesUpdated {
                    patch: UserPreferences {
                        confirm_delete: Some(value),
                        ..UserPreferences::default()
                    },
                },
            ),
            Err(e) => log::warn!("[cache] confirm-delete save failed for {profile}: {e}"),
        }
    }

    pub fn load_hover_info(&self, profile: &str) -> bool {
        !matches!(self.storage.get::<bool>(&hover_key(profile)), Some(false))
    }

    pub fn save_hover_info(&self, profile: &str, value: bool) {
        match self.storage.set(&hover_key(profile), &value) {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::PreferencesUpdated {
                    patch: UserPreferences {
                        show_hover_info: Some(value),
                        ..UserPreferences::default()
                    },
                },
            ),
            Err(e) => log::warn!("[cache] hover-info save failed for {profile}: {e}"),
        }
    }

    pub fn load_categories(&self, profile: &str) -> Vec<String> {
        let Some(Value::Array(values)) = self.storage.get_value(&categories_key(profile)) else {
            return UserPreferences::default_categories();
        };
        let categories: Vec<String> = values
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect();
        if categories.is_empty() {
            UserPreferences::default_categories()
        } else {
            categories
        }
    }

    pub fn save_categories(&self, profile: &str, categories: &[String]) {
        match self.storage.set(&categories_key(profile), &categories) {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::CategoriesUpdated {
                    categories: categories.to_vec(),
                },
            ),
            Err(e) => log::warn!("[cache] categories save failed for {profile}: {e}"),
        }
    }

    pub fn load_gender(&self, profile: &str) -> ProfileGender {
        self.storage
            .get::<ProfileGender>(&gender_key(profile))
            .unwrap_or_default()
    }

    pub fn save_gender(&self, profile: &str, value: ProfileGender) {
        match self.storage.set(&gender_key(profile), &value) {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::ProfileUpdated {
                    gender: Some(value),
                    avatar: None,
                },
            ),
            Err(e) => log::warn!("[cache] gender save failed for {profile}: {e}"),
        }
    }

    pub fn load_avatar(&self, profile: &str) -> Option<String> {
        self.storage
            .get::<String>(&avatar_key(profile))
            .filter(|v| !v.is_empty())
    }

    pub fn save_avatar(&self, profile: &str, value: Option<&str>) {
        let result = match value {
            Some(avatar) => self.storage.set(&avatar_key(profile), &avatar),
            None => self.storage.remove(&avatar_key(profile)),
        };
        match result {
            Ok(()) => self.bus.publish(
                profile,
                StoreEvent::ProfileUpdated {
                    gender: None,
                    avatar: value.map(str::to_string),
                },
            ),
            Err(e) => log::warn!("[cache] avatar save failed for {profile}: {e}"),
        }
    }

    // ---------------------------------------------------------------- locale

    pub fn load_locale(&self) -> Locale {
        self.storage.get::<Locale>(LANG_KEY).unwrap_or_default()
    }

    /// Locale is app-wide, but the event is published under the profile key
    /// so per-session subscribers pick it up.
    pub fn save_locale(&self, profile: &str, locale: Locale) {
        match self.storage.set(LANG_KEY, &locale) {
            Ok(()) => self
                .bus
                .publish(profile, StoreEvent::LanguageUpdated { locale }),
            Err(e) => log::warn!("[cache] locale save failed: {e}"),
        }
    }

    // ------------------------------------------------------- migration guard

    /// True when any preference key exists for this profile; the one-time
    /// preference migration only pushes the full snapshot in that case.
    pub fn has_any_preferences(&self, profile: &str) -> bool {
        [
            confirm_key(profile),
            hover_key(profile),
            categories_key(profile),
            gender_key(profile),
            LANG_KEY.to_string(),
        ]
        .iter()
        .any(|key| self.storage.contains(key))
    }

    /// Full local snapshot, pushed remotely once when no remote document
    /// exists yet.
    pub fn preferences_snapshot(&self, profile: &str) -> UserPreferences {
        UserPreferences {
            locale: Some(self.load_locale()),
            confirm_delete: Some(self.load_confirm_delete(profile)),
            show_hover_info: Some(self.load_hover_info(profile)),
            categories: Some(self.load_categories(profile)),
            profile_gender: Some(self.load_gender(profile)),
        }
    }
}
