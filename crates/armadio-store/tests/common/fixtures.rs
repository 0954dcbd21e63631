use armadio_core::{AuthProvider, AuthUser, Item, Season};

/// Creates a test Item with a fixed id
pub fn create_test_item(id: &str, category: &str) -> Item {
    Item {
        id: id.to_string(),
        ..Item::new(category, "Blu", Season::Estate)
    }
}

/// Creates a test google-account user with a sync uid
pub fn create_test_user(uid: &str) -> AuthUser {
    AuthUser {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        picture: Some("https://example.com/avatar.png".to_string()),
        provider: AuthProvider::Google,
        uid: Some(uid.to_string()),
        tier: None,
    }
}
