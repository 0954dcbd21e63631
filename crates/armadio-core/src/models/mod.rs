pub mod auth_provider;
pub mod auth_user;
pub mod image_resource;
pub mod item;
pub mod item_status;
pub mod locale;
pub mod profile_gender;
pub mod season;
pub mod subscription_tier;
pub mod user_preferences;
