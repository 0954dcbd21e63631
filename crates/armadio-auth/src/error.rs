use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Sign-in rejected: {code} {location}")]
    Rejected {
        code: String,
        location: ErrorLocation,
    },

    #[error("Identity endpoint unreachable: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("No identity endpoint configured {location}")]
    NotConfigured { location: ErrorLocation },
}

impl AuthError {
    /// Message shown on the sign-in form; provider error codes stay out of
    /// the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Rejected { code, .. } => match code.as_str() {
                "EMAIL_EXISTS" => "Email già registrata",
                "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
                    "Credenziali non valide"
                }
                "USER_DISABLED" => "Account disabilitato",
                "TOO_MANY_ATTEMPTS_TRY_LATER" => "Troppi tentativi, riprova più tardi",
                code if code.starts_with("WEAK_PASSWORD") => "Password troppo debole",
                _ => "Accesso non riuscito",
            },
            Self::Http { .. } => "Servizio di accesso non raggiungibile",
            Self::TokenExpired { .. } => "Sessione scaduta, accedi di nuovo",
            _ => "Accesso non riuscito",
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
