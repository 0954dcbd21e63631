mod common;

use common::fixtures::create_test_item;

use armadio_core::{Locale, ProfileGender, UserPreferences};
use armadio_store::{EventBus, LocalCache, LocalStorage, StoreEvent};

use googletest::prelude::*;
use tempfile::TempDir;

const PROFILE: &str = "test@example.com";

fn create_test_cache() -> (TempDir, LocalCache) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cache = LocalCache::new(LocalStorage::new(dir.path()), EventBus::default());
    (dir, cache)
}

#[test]
fn given_empty_storage_when_loading_then_fixed_defaults_return() {
    // Given: A cache over an empty directory
    let (_dir, cache) = create_test_cache();

    // When / Then: Every accessor returns its default
    assert_that!(cache.load_items(PROFILE).is_empty(), eq(true));
    assert_that!(cache.load_confirm_delete(PROFILE), eq(true));
    assert_that!(cache.load_hover_info(PROFILE), eq(true));
    assert_that!(
        cache.load_categories(PROFILE),
        eq(&UserPreferences::default_categories())
    );
    assert_that!(cache.load_gender(PROFILE), eq(ProfileGender::Female));
    assert_that!(cache.load_avatar(PROFILE), none());
    assert_that!(cache.load_locale(), eq(Locale::It));
}

#[test]
fn given_malformed_item_file_when_loading_then_returns_empty_list() {
    // Given: An item cache file that is not valid JSON
    let (dir, cache) = create_test_cache();
    std::fs::write(dir.path().join(format!("items-{PROFILE}.json")), "not json").unwrap();

    // When: Loading items
    let items = cache.load_items(PROFILE);

    // Then: The corrupt file reads as an empty wardrobe
    assert_that!(items.is_empty(), eq(true));
}

#[test]
fn given_saved_items_when_reloaded_then_round_trip_is_lossless() {
    // Given: A cache with two saved items
    let (_dir, cache) = create_test_cache();
    let items = vec![
        create_test_item("a", "Maglietta"),
        create_test_item("b", "Giacca"),
    ];

    // When: Saving and reloading
    cache.save_items(PROFILE, &items);
    let loaded = cache.load_items(PROFILE);

    // Then: The same items come back in order
    assert_that!(loaded, eq(&items));
}

#[test]
fn given_legacy_item_records_when_loading_then_old_shape_is_upgraded() {
    // Given: A cache file in the pre-upload data shape
    let (dir, cache) = create_test_cache();
    let raw = r#"[{"id":"a","category":"Felpa","imageUrl":"https://img/x.png","description":"vecchia nota"}]"#;
    std::fs::write(dir.path().join(format!("items-{PROFILE}.json")), raw).unwrap();

    // When: Loading items
    let items = cache.load_items(PROFILE);

    // Then: imageUrl became a legacy image resource and description the note
    assert_that!(items.len(), eq(1));
    let image = items[0].image.as_ref().unwrap();
    assert_that!(image.provider.as_str(), eq("legacy"));
    assert_that!(image.url.as_str(), eq("https://img/x.png"));
    assert_that!(items[0].note.as_str(), eq("vecchia nota"));
}

#[test]
fn given_stored_false_when_loading_confirm_delete_then_returns_false() {
    // Given: A profile that turned delete confirmation off
    let (_dir, cache) = create_test_cache();
    cache.save_confirm_delete(PROFILE, false);

    // When / Then: Only that stored false disables the confirmation
    assert_that!(cache.load_confirm_delete(PROFILE), eq(false));
    assert_that!(cache.load_confirm_delete("other@example.com"), eq(true));
}

#[test]
fn given_empty_category_list_when_saved_then_defaults_return_on_load() {
    // Given: A profile whose stored category list is empty
    let (_dir, cache) = create_test_cache();
    cache.save_categories(PROFILE, &[]);

    // When: Loading categories
    let categories = cache.load_categories(PROFILE);

    // Then: The fixed default list comes back
    assert_that!(categories, eq(&UserPreferences::default_categories()));
}

#[test]
fn given_saved_avatar_when_cleared_then_key_is_removed() {
    // Given: A profile with a stored avatar
    let (_dir, cache) = create_test_cache();
    cache.save_avatar(PROFILE, Some("data:image/png;base64,AAA"));
    assert_that!(cache.load_avatar(PROFILE), some(anything()));

    // When: Clearing the avatar
    cache.save_avatar(PROFILE, None);

    // Then: Nothing is stored any more
    assert_that!(cache.load_avatar(PROFILE), none());
}

#[test]
fn given_subscriber_when_items_saved_then_update_event_is_published() {
    // Given: A subscriber on the profile's event channel
    let (_dir, cache) = create_test_cache();
    let mut rx = cache.bus().subscribe(PROFILE);
    let items = vec![create_test_item("a", "Maglietta")];

    // When: Saving items
    cache.save_items(PROFILE, &items);

    // Then: The subscriber receives the typed update
    match rx.try_recv() {
        Ok(StoreEvent::ItemsUpdated { items: published }) => {
            assert_that!(published, eq(&items));
        }
        other => panic!("expected ItemsUpdated, got {other:?}"),
    }
}

#[test]
fn given_locale_save_when_published_then_event_carries_the_locale() {
    // Given: A subscriber on the profile's event channel
    let (_dir, cache) = create_test_cache();
    let mut rx = cache.bus().subscribe(PROFILE);

    // When: Saving the app-wide locale under this profile
    cache.save_locale(PROFILE, Locale::Ja);

    // Then: The language event reaches the subscriber and the value persists
    match rx.try_recv() {
        Ok(StoreEvent::LanguageUpdated { locale }) => {
            assert_that!(locale, eq(Locale::Ja));
        }
        other => panic!("expected LanguageUpdated, got {other:?}"),
    }
    assert_that!(cache.load_locale(), eq(Locale::Ja));
}

#[test]
fn given_fresh_profile_when_checking_preferences_then_none_exist_until_first_save() {
    // Given: A cache over an empty directory
    let (_dir, cache) = create_test_cache();
    assert_that!(cache.has_any_preferences(PROFILE), eq(false));

    // When: Saving a single preference
    cache.save_hover_info(PROFILE, false);

    // Then: The profile now has local preference state
    assert_that!(cache.has_any_preferences(PROFILE), eq(true));
}

#[test]
fn given_saved_preferences_when_snapshotting_then_every_field_is_set() {
    // Given: A profile with a few stored preferences
    let (_dir, cache) = create_test_cache();
    cache.save_confirm_delete(PROFILE, false);
    cache.save_gender(PROFILE, ProfileGender::Male);

    // When: Building the full snapshot
    let snapshot = cache.preferences_snapshot(PROFILE);

    // Then: Stored values and defaults all appear as set fields
    assert_that!(snapshot.confirm_delete, some(eq(false)));
    assert_that!(snapshot.show_hover_info, some(eq(true)));
    assert_that!(snapshot.profile_gender, some(eq(ProfileGender::Male)));
    assert_that!(snapshot.locale, some(eq(Locale::It)));
    assert_that!(
        snapshot.categories,
        some(eq(&UserPreferences::default_categories()))
    );
}
