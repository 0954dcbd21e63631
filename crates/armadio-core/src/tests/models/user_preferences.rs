use crate::{Locale, ProfileGender, UserPreferences};

#[test]
fn test_merge_overwrites_only_set_fields() {
    let mut prefs = UserPreferences {
        locale: Some(Locale::It),
        confirm_delete: Some(true),
        show_hover_info: Some(true),
        categories: Some(vec!["Maglietta".to_string()]),
        profile_gender: Some(ProfileGender::Female),
    };

    let patch = UserPreferences {
        confirm_delete: Some(false),
        profile_gender: Some(ProfileGender::Male),
        ..UserPreferences::default()
    };
    prefs.merge(&patch);

    assert_eq!(prefs.locale, Some(Locale::It));
    assert_eq!(prefs.confirm_delete, Some(false));
    assert_eq!(prefs.show_hover_info, Some(true));
    assert_eq!(prefs.categories, Some(vec!["Maglietta".to_string()]));
    assert_eq!(prefs.profile_gender, Some(ProfileGender::Male));
}

#[test]
fn test_empty_patch_is_empty() {
    assert!(UserPreferences::default().is_empty());

    let patch = UserPreferences {
        locale: Some(Locale::Ja),
        ..UserPreferences::default()
    };
    assert!(!patch.is_empty());
}

#[test]
fn test_unset_fields_stay_off_the_wire() {
    let patch = UserPreferences {
        show_hover_info: Some(false),
        ..UserPreferences::default()
    };

    let value = serde_json::to_value(&patch).unwrap();

    assert_eq!(value["showHoverInfo"], false);
    assert!(value.get("locale").is_none());
    assert!(value.get("confirmDelete").is_none());
    assert!(value.get("profileGender").is_none());
}

#[test]
fn test_locale_wire_codes() {
    assert_eq!(serde_json::to_value(Locale::Ja).unwrap(), "JA");
    assert_eq!(
        serde_json::from_value::<Locale>(serde_json::json!("RU")).unwrap(),
        Locale::Ru
    );
    assert!(serde_json::from_value::<Locale>(serde_json::json!("ru")).is_err());
}
