pub mod preferences_store;
pub mod reconciliation;
pub mod user_profile_store;
pub mod wardrobe_store;
