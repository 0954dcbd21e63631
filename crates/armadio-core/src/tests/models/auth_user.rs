use crate::{AuthProvider, AuthUser};

#[test]
fn test_profile_key_prefers_email_then_uid() {
    let mut user = AuthUser::guest();
    user.email = "anna@example.com".to_string();
    user.uid = Some("uid-1".to_string());
    assert_eq!(user.profile_key(), "anna@example.com");

    user.email = String::new();
    assert_eq!(user.profile_key(), "uid-1");

    user.uid = None;
    assert_eq!(user.profile_key(), "guest");
}

#[test]
fn test_local_accounts_never_sync() {
    let mut user = AuthUser::guest();
    user.uid = Some("uid-1".to_string());
    assert_eq!(user.provider, AuthProvider::Local);
    assert!(user.sync_uid().is_none());

    user.provider = AuthProvider::Google;
    assert_eq!(user.sync_uid(), Some("uid-1"));

    user.uid = Some(String::new());
    assert!(user.sync_uid().is_none());
}
