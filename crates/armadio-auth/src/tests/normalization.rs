use crate::AuthError;
use crate::identity_client::IdentitySession;

use armadio_core::AuthProvider;

fn session() -> IdentitySession {
    IdentitySession {
        id_token: "token".to_string(),
        uid: "uid-123".to_string(),
        email: Some("anna@example.com".to_string()),
        display_name: Some("Anna".to_string()),
        photo_url: Some("https://example.com/a.png".to_string()),
        is_anonymous: false,
        provider_id: Some("google.com".to_string()),
    }
}

#[test]
fn given_provider_session_when_normalized_then_maps_to_google_user() {
    let user = session().normalized_user();

    assert_eq!(user.provider, AuthProvider::Google);
    assert_eq!(user.name, "Anna");
    assert_eq!(user.email, "anna@example.com");
    assert_eq!(user.uid.as_deref(), Some("uid-123"));
    assert!(user.tier.is_none());
}

#[test]
fn given_password_session_when_normalized_then_maps_to_email_provider() {
    let mut s = session();
    s.provider_id = Some("password".to_string());

    let user = s.normalized_user();

    assert_eq!(user.provider, AuthProvider::Email);
}

#[test]
fn given_anonymous_session_when_normalized_then_maps_to_local_provider() {
    let mut s = session();
    s.is_anonymous = true;

    let user = s.normalized_user();

    assert_eq!(user.provider, AuthProvider::Local);
    assert!(user.sync_uid().is_none());
}

#[test]
fn given_missing_display_values_when_normalized_then_fallbacks_apply() {
    let mut s = session();
    s.display_name = None;
    s.email = Some(String::new());
    s.photo_url = Some(String::new());

    let user = s.normalized_user();

    assert_eq!(user.name, "Utente");
    assert_eq!(user.email, "ospite@local");
    assert!(user.picture.is_none());
}

#[test]
fn given_rejection_codes_when_mapped_then_user_messages_stay_generic() {
    let location = error_location::ErrorLocation::from(std::panic::Location::caller());
    let rejected = AuthError::Rejected {
        code: "EMAIL_NOT_FOUND".to_string(),
        location,
    };

    assert_eq!(rejected.user_message(), "Credenziali non valide");
}
