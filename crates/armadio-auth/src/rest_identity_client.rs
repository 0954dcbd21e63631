use crate::identity_client::{IdentityClient, IdentitySession};
use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use serde::Deserialize;
use serde_json::{Value, json};

/// REST client for an identitytoolkit-style provider.
///
/// Routes hang off the configured endpoint
/// (`{endpoint}/accounts:signInWithPassword?key={api_key}` and friends);
/// rejections carry a provider error code mapped to a user message later.
pub struct RestIdentityClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionResponse {
    #[serde(default)]
    id_token: String,
    #[serde(default)]
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    provider_id: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestIdentityClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    async fn post(&self, route: &str, body: Value) -> AuthErrorResult<SessionResponse> {
        let url = format!(
            "{}/{route}?key={}",
            self.endpoint.trim_end_matches('/'),
            self.api_key
        );
        let response = self.client.post(url).json(&body).send().await?;

        if !response.status().is_success() {
            let code = match response.json::<ErrorResponse>().await {
                Ok(rejection) => rejection.error.message,
                Err(_) => "UNKNOWN".to_string(),
            };
            return Err(AuthError::Rejected {
                code,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.json().await?)
    }

    fn session(response: SessionResponse, is_anonymous: bool) -> IdentitySession {
        IdentitySession {
            id_token: response.id_token,
            uid: response.local_id,
            email: response.email,
            display_name: response.display_name,
            photo_url: response.photo_url,
            is_anonymous,
            provider_id: response.provider_id,
        }
    }
}

#[async_trait]
impl IdentityClient for RestIdentityClient {
    async fn sign_in_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<IdentitySession> {
        let response = self
            .post(
                "accounts:signInWithPassword",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        let mut session = Self::session(response, false);
        session.provider_id.get_or_insert("password".to_string());
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> AuthErrorResult<IdentitySession> {
        let response = self
            .post(
                "accounts:signUp",
                json!({
                    "email": email,
                    "password": password,
                    "returnSecureToken": true,
                }),
            )
            .await?;
        let mut session = Self::session(response, false);
        session.provider_id.get_or_insert("password".to_string());
        Ok(session)
    }

    async fn sign_in_anonymous(&self) -> AuthErrorResult<IdentitySession> {
        // An empty signUp body yields an anonymous account.
        let response = self
            .post("accounts:signUp", json!({ "returnSecureToken": true }))
            .await?;
        Ok(Self::session(response, true))
    }

    async fn sign_in_token(&self, provider_token: &str) -> AuthErrorResult<IdentitySession> {
        let response = self
            .post(
                "accounts:signInWithIdp",
                json!({
                    "postBody": format!("id_token={provider_token}&providerId=google.com"),
                    "requestUri": "http://localhost",
                    "returnSecureToken": true,
                }),
            )
            .await?;
        let mut session = Self::session(response, false);
        session.provider_id.get_or_insert("google.com".to_string());
        Ok(session)
    }
}
