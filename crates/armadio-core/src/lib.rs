pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::auth_provider::AuthProvider;
pub use models::auth_user::AuthUser;
pub use models::image_resource::ImageResource;
pub use models::item::Item;
pub use models::item_status::ItemStatus;
pub use models::locale::Locale;
pub use models::profile_gender::ProfileGender;
pub use models::season::Season;
pub use models::subscription_tier::SubscriptionTier;
pub use models::user_preferences::{DEFAULT_CATEGORIES, UserPreferences};

/// Profile key for sessions with no linked account.
pub const GUEST_PROFILE_KEY: &str = "guest";

#[cfg(test)]
mod tests;
