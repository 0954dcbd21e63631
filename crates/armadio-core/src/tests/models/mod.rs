mod auth_user;
mod item;
mod user_preferences;
