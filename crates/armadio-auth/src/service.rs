use crate::Result as AuthErrorResult;
use crate::claims::Claims;
use crate::identity_client::{IdentityClient, IdentitySession};

use armadio_core::AuthUser;
use armadio_store::UserProfileStore;

use std::sync::Arc;

use tokio::sync::watch;

/// Snapshot of the auth state: at most one signed-in user, plus the last
/// sign-in failure for the form to show.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub error: Option<String>,
}

/// Owns the current identity and publishes every change on a watch channel.
///
/// Sign-in and sign-out replace the state wholesale. Without a configured
/// identity client only the local guest session is available.
pub struct AuthService {
    client: Option<Arc<dyn IdentityClient>>,
    profiles: UserProfileStore,
    state_tx: watch::Sender<AuthState>,
}

impl AuthService {
    pub fn new(client: Option<Arc<dyn IdentityClient>>, profiles: UserProfileStore) -> Self {
        let (state_tx, _) = watch::channel(AuthState::default());
        Self {
            client,
            profiles,
            state_tx,
        }
    }

    /// Auth-state-changed stream; the receiver always sees the latest state.
    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state_tx.subscribe()
    }

    pub fn current(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }

    pub async fn sign_in_password(&self, email: &str, password: &str) -> Option<AuthUser> {
        match &self.client {
            Some(client) => {
                let result = client.sign_in_password(email, password).await;
                self.apply(result).await
            }
            None => self.sign_in_guest().await,
        }
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> Option<AuthUser> {
        match &self.client {
            Some(client) => {
                let result = client.sign_up(email, password).await;
                self.apply(result).await
            }
            None => self.sign_in_guest().await,
        }
    }

    /// Exchange of an OAuth id token from a provider popup.
    pub async fn sign_in_token(&self, provider_token: &str) -> Option<AuthUser> {
        match &self.client {
            Some(client) => {
                let result = client.sign_in_token(provider_token).await;
                self.apply(result).await
            }
            None => self.sign_in_guest().await,
        }
    }

    /// Restores a session from a stored id token without a network
    /// round-trip; expired or malformed tokens leave the state signed out.
    pub async fn restore_session(&self, id_token: &str) -> Option<AuthUser> {
        let result = Claims::decode_unverified(id_token)
            .map(|claims| IdentitySession::from_claims(id_token, &claims));
        self.apply(result).await
    }

    /// Guest sign-in: anonymous provider session when a client is
    /// configured, otherwise the fixed local guest user.
    pub async fn sign_in_guest(&self) -> Option<AuthUser> {
        match &self.client {
            Some(client) => {
                let result = client.sign_in_anonymous().await;
                self.apply(result).await
            }
            None => {
                let guest = AuthUser::guest();
                self.state_tx.send_replace(AuthState {
                    user: Some(guest.clone()),
                    error: None,
                });
                Some(guest)
            }
        }
    }

    pub fn sign_out(&self) {
        self.state_tx.send_replace(AuthState::default());
    }

    async fn apply(&self, result: AuthErrorResult<IdentitySession>) -> Option<AuthUser> {
        match result {
            Ok(session) => {
                let user = session.normalized_user();
                self.state_tx.send_replace(AuthState {
                    user: Some(user.clone()),
                    error: None,
                });
                self.patch_tier(&user).await;
                Some(self.current().user.unwrap_or(user))
            }
            Err(e) => {
                log::warn!("[auth] sign-in failed: {e}");
                self.state_tx.send_replace(AuthState {
                    user: None,
                    error: Some(e.user_message().to_string()),
                });
                None
            }
        }
    }

    /// Loads the subscription tier after sign-in and patches it into the
    /// current user, but only while that user is still signed in.
    async fn patch_tier(&self, user: &AuthUser) {
        let Some(uid) = user.sync_uid() else {
            return;
        };
        match self.profiles.load_tier(uid).await {
            Ok(tier) => {
                self.state_tx.send_if_modified(|state| match &mut state.user {
                    Some(current) if current.uid.as_deref() == Some(uid) => {
                        current.tier = Some(tier);
                        true
                    }
                    _ => false,
                });
            }
            Err(e) => log::warn!("[auth] tier load failed for {uid}: {e}"),
        }
    }
}
