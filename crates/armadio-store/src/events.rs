use armadio_core::{Item, Locale, ProfileGender, UserPreferences};

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

/// Typed notification published after a successful local-cache write, so
/// already-mounted views update without re-reading storage.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    ItemsUpdated { items: Vec<Item> },
    PreferencesUpdated { patch: UserPreferences },
    CategoriesUpdated { categories: Vec<String> },
    ProfileUpdated {
        gender: Option<ProfileGender>,
        avatar: Option<String>,
    },
    LanguageUpdated { locale: Locale },
}

/// Manages broadcast channels for all profile keys
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<RwLock<BusInner>>,
    capacity: usize,
}

struct BusInner {
    channels: HashMap<String, ProfileChannel>,
}

/// Per-profile broadcast channel
struct ProfileChannel {
    sender: broadcast::Sender<StoreEvent>,
    subscriber_count: usize,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BusInner {
                channels: HashMap::new(),
            })),
            capacity,
        }
    }

    /// Subscribe to a profile's event channel
    pub fn subscribe(&self, profile_key: &str) -> broadcast::Receiver<StoreEvent> {
        let mut inner = self.inner.write().expect("event bus lock poisoned");

        let channel = inner
            .channels
            .entry(profile_key.to_string())
            .or_insert_with(|| {
                let (sender, _) = broadcast::channel(self.capacity);
                log::debug!("Created event channel for profile {}", profile_key);
                ProfileChannel {
                    sender,
                    subscriber_count: 0,
                }
            });

        channel.subscriber_count += 1;
        channel.sender.subscribe()
    }

    /// Unsubscribe from a profile's event channel
    pub fn unsubscribe(&self, profile_key: &str) {
        let mut inner = self.inner.write().expect("event bus lock poisoned");

        if let Some(channel) = inner.channels.get_mut(profile_key) {
            channel.subscriber_count = channel.subscriber_count.saturating_sub(1);

            // Clean up empty channels
            if channel.subscriber_count == 0 {
                inner.channels.remove(profile_key);
                log::debug!("Removed empty event channel for profile {}", profile_key);
            }
        }
    }

    /// Publish an event to all subscribers of a profile key.
    ///
    /// Absent or lagging subscribers are not an error; local writes must
    /// never fail because nobody is listening.
    pub fn publish(&self, profile_key: &str, event: StoreEvent) {
        let inner = self.inner.read().expect("event bus lock poisoned");

        if let Some(channel) = inner.channels.get(profile_key) {
            match channel.sender.send(event) {
                Ok(receiver_count) => {
                    log::trace!(
                        "Published event to profile {} ({} receivers)",
                        profile_key,
                        receiver_count
                    );
                }
                Err(_) => {
                    log::trace!("No live receivers for profile {}", profile_key);
                }
            }
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
