pub mod claims;
pub mod error;
pub mod identity_client;
pub mod rest_identity_client;
pub mod service;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use identity_client::{IdentityClient, IdentitySession};
pub use rest_identity_client::RestIdentityClient;
pub use service::{AuthService, AuthState};

#[cfg(test)]
mod tests;
