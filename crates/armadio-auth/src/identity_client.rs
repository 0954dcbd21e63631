use crate::Result as AuthErrorResult;
use crate::claims::Claims;

use armadio_core::{AuthProvider, AuthUser};

use async_trait::async_trait;

/// Raw session handed back by the identity provider.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentitySession {
    pub id_token: String,
    pub uid: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub is_anonymous: bool,
    pub provider_id: Option<String>,
}

impl IdentitySession {
    /// Normalizes the provider record into the app's user shape: guests get
    /// fixed display values, password accounts map to the email provider and
    /// everything else to google.
    pub fn normalized_user(&self) -> AuthUser {
        let provider = if self.is_anonymous {
            AuthProvider::Local
        } else if self.provider_id.as_deref() == Some("password") {
            AuthProvider::Email
        } else {
            AuthProvider::Google
        };

        AuthUser {
            name: self
                .display_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| "Utente".to_string()),
            email: self
                .email
                .clone()
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| "ospite@local".to_string()),
            picture: self.photo_url.clone().filter(|p| !p.is_empty()),
            provider,
            uid: Some(self.uid.clone()).filter(|uid| !uid.is_empty()),
            tier: None,
        }
    }

    /// Rebuilds a session from a stored id token.
    pub fn from_claims(token: &str, claims: &Claims) -> Self {
        Self {
            id_token: token.to_string(),
            uid: claims.sub.clone(),
            email: claims.email.clone(),
            display_name: claims.name.clone(),
            photo_url: claims.picture.clone(),
            is_anonymous: false,
            provider_id: claims.provider_id.clone(),
        }
    }
}

/// Identity-provider boundary; one implementation per backend.
#[async_trait]
pub trait IdentityClient: Send + Sync {
    async fn sign_in_password(&self, email: &str, password: &str)
    -> AuthErrorResult<IdentitySession>;

    async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<IdentitySession>;

    /// Anonymous session for guests who still want a provider-side uid.
    async fn sign_in_anonymous(&self) -> AuthErrorResult<IdentitySession>;

    /// Exchanges an OAuth id token obtained from a provider popup.
    async fn sign_in_token(&self, provider_token: &str) -> AuthErrorResult<IdentitySession>;
}
