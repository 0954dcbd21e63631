//! Document paths for the per-user key space.
//!
//! `users/{uid}` holds the profile document, `users/{uid}/settings/app` the
//! preference document, and `users/{uid}/wardrobe/{item}` the per-item
//! sub-collection.

pub fn user_doc(uid: &str) -> String {
    format!("users/{uid}")
}

pub fn preferences_doc(uid: &str) -> String {
    format!("users/{uid}/settings/app")
}

pub fn wardrobe_collection(uid: &str) -> String {
    format!("users/{uid}/wardrobe")
}

pub fn wardrobe_doc(uid: &str, item_id: &str) -> String {
    format!("users/{uid}/wardrobe/{item_id}")
}

/// The collection a document path belongs to (everything before the last
/// segment), and the document id (the last segment).
pub(crate) fn split(path: &str) -> (&str, &str) {
    match path.rsplit_once('/') {
        Some((collection, id)) => (collection, id),
        None => ("", path),
    }
}
