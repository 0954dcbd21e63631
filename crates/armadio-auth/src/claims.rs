use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Id-token claims issued by the identity provider.
///
/// Used to refresh the normalized user on startup without a network
/// round-trip; the provider already verified the signature when it issued
/// the token, so only expiry and shape are checked here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (provider uid)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    /// Expiration timestamp (Unix)
    pub exp: i64,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    #[serde(default)]
    pub provider_id: Option<String>,
}

impl Claims {
    /// Decode a stored id token, checking expiry but not the signature.
    #[track_caller]
    pub fn decode_unverified(token: &str) -> AuthErrorResult<Claims> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.algorithms = vec![Algorithm::RS256, Algorithm::HS256];
        validation.insecure_disable_signature_validation();
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.leeway = 30; // 30 second clock skew tolerance

        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;
        Ok(token_data.claims)
    }

    /// Validate claims after decoding
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (uid) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
