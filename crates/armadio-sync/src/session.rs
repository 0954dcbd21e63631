use crate::Result as SyncErrorResult;
use crate::debounce::Debouncer;
use crate::handle::SyncHandle;
use crate::state::SyncState;

use armadio_config::SyncConfig;
use armadio_core::{AuthUser, Item, UserPreferences};
use armadio_store::{
    LocalCache, PreferencesStore, ReconciliationContext, StoreEvent, UserProfileStore,
    WardrobeStore,
};

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Orchestrates one profile's local/remote synchronization.
///
/// Hydrates remote state into the local cache once, then listens on the
/// event bus and pushes local mutations back out with per-kind debouncing.
/// Local-only sessions (no sync uid) skip every remote call and just serve
/// the cache.
pub struct SyncSession {
    user: AuthUser,
    profile_key: String,
    cache: Arc<LocalCache>,
    wardrobe: Arc<WardrobeStore>,
    preferences: Arc<PreferencesStore>,
    profiles: Arc<UserProfileStore>,
    handle: SyncHandle,
    items: Mutex<Vec<Item>>,
    pending_prefs: Mutex<UserPreferences>,
    ctx: tokio::sync::Mutex<ReconciliationContext>,
    item_debounce: Debouncer,
    prefs_debounce: Debouncer,
    event_task: Mutex<Option<JoinHandle<()>>>,
    shut_down: AtomicBool,
}

impl SyncSession {
    pub fn new(
        user: AuthUser,
        cache: Arc<LocalCache>,
        wardrobe: Arc<WardrobeStore>,
        preferences: Arc<PreferencesStore>,
        profiles: Arc<UserProfileStore>,
        config: &SyncConfig,
    ) -> Arc<Self> {
        let profile_key = user.profile_key();
        Arc::new(Self {
            user,
            profile_key,
            cache,
            wardrobe,
            preferences,
            profiles,
            handle: SyncHandle::new(),
            items: Mutex::new(Vec::new()),
            pending_prefs: Mutex::new(UserPreferences::default()),
            ctx: tokio::sync::Mutex::new(ReconciliationContext::new()),
            item_debounce: Debouncer::new(config.items_debounce()),
            prefs_debounce: Debouncer::new(config.prefs_debounce()),
            event_task: Mutex::new(None),
            shut_down: AtomicBool::new(false),
        })
    }

    pub fn handle(&self) -> SyncHandle {
        self.handle.clone()
    }

    pub fn profile_key(&self) -> &str {
        &self.profile_key
    }

    /// The current in-memory item list; mirrors the local cache once the
    /// session is hydrated.
    pub fn items(&self) -> Vec<Item> {
        self.items.lock().expect("session lock poisoned").clone()
    }

    /// One-time hydration: remote state wins where it exists, local state is
    /// migrated up where it doesn't. Always ends Ready; remote failures
    /// degrade the session to local-only instead of blocking it.
    ///
    /// The event intake is subscribed here, after the hydration writes and
    /// before the Ready transition. Cache events published during hydration
    /// predate the subscription and can never echo back as remote saves;
    /// events published after `hydrate` returns are always received.
    pub async fn hydrate(self: &Arc<Self>) -> SyncErrorResult<()> {
        self.handle.begin_hydration()?;

        self.hydrate_items_and_preferences().await;

        // A torn-down session must not come up Ready.
        if !self.handle.is_cancelled() {
            self.start_event_intake();
            self.handle.finish_hydration()?;
        }
        Ok(())
    }

    async fn hydrate_items_and_preferences(&self) {
        let Some(uid) = self.user.sync_uid().map(str::to_string) else {
            let local = self.cache.load_items(&self.profile_key);
            *self.items.lock().expect("session lock poisoned") = local;
            return;
        };

        // Profile upsert failure is not fatal to hydration.
        if let Err(e) = self.profiles.upsert_from_auth(&self.user).await {
            log::warn!("[sync] profile upsert failed for {uid}: {e}");
        }
        if self.handle.is_cancelled() {
            return;
        }

        self.hydrate_items(&uid).await;
        if self.handle.is_cancelled() {
            return;
        }
        self.hydrate_preferences(&uid).await;
    }

    async fn hydrate_items(&self, uid: &str) {
        let mut ctx = self.ctx.lock().await;
        match self.wardrobe.load(uid, &mut ctx).await {
            Ok(remote_items) if !remote_items.is_empty() => {
                if self.handle.is_cancelled() {
                    return;
                }
                // Remote wins: overwrite the local cache wholesale.
                self.cache.save_items(&self.profile_key, &remote_items);
                *self.items.lock().expect("session lock poisoned") = remote_items;
            }
            Ok(_) => {
                if self.handle.is_cancelled() {
                    return;
                }
                let gathered = self.gather_local_items(uid);
                match self.wardrobe.migrate_if_needed(uid, &gathered, &mut ctx).await {
                    Ok(outcome) if outcome.migrated => {
                        log::info!(
                            "[sync] migrated {} local items for {uid}",
                            gathered.len()
                        );
                    }
                    Ok(_) => {}
                    Err(e) => {
                        log::warn!("[sync] item migration failed for {uid}: {e}");
                        self.handle.set_remote_available(false);
                    }
                }
                if !gathered.is_empty() {
                    self.cache.save_items(&self.profile_key, &gathered);
                }
                *self.items.lock().expect("session lock poisoned") = gathered;
            }
            Err(e) => {
                log::warn!("[sync] remote item load failed for {uid}: {e}");
                self.handle.set_remote_available(false);
                let local = self.cache.load_items(&self.profile_key);
                *self.items.lock().expect("session lock poisoned") = local;
            }
        }
    }

    async fn hydrate_preferences(&self, uid: &str) {
        match self.preferences.load(uid).await {
            Ok(Some(remote)) => {
                if self.handle.is_cancelled() {
                    return;
                }
                self.apply_remote_preferences(&remote);
            }
            Ok(None) => {
                if self.handle.is_cancelled() {
                    return;
                }
                // First device for this account: push the locale alone when
                // the profile has no local preference state, otherwise the
                // full snapshot.
                let patch = if self.cache.has_any_preferences(&self.profile_key) {
                    self.cache.preferences_snapshot(&self.profile_key)
                } else {
                    UserPreferences {
                        locale: Some(self.cache.load_locale()),
                        ..UserPreferences::default()
                    }
                };
                if let Err(e) = self.preferences.save(uid, &patch).await {
                    log::warn!("[sync] initial preference push failed for {uid}: {e}");
                }
            }
            Err(e) => {
                log::warn!("[sync] remote preference load failed for {uid}: {e}");
                self.handle.set_remote_available(false);
            }
        }
    }

    /// Remote preferences overwrite the local cache, locale included. The
    /// session is still Hydrating here, so the cache events this publishes
    /// are not echoed back as remote saves.
    fn apply_remote_preferences(&self, remote: &UserPreferences) {
        if let Some(locale) = remote.locale {
            self.cache.save_locale(&self.profile_key, locale);
        }
        if let Some(confirm) = remote.confirm_delete {
            self.cache.save_confirm_delete(&self.profile_key, confirm);
        }
        if let Some(hover) = remote.show_hover_info {
            self.cache.save_hover_info(&self.profile_key, hover);
        }
        if let Some(categories) = &remote.categories {
            self.cache.save_categories(&self.profile_key, categories);
        }
        if let Some(gender) = remote.profile_gender {
            self.cache.save_gender(&self.profile_key, gender);
        }
    }

    /// Items cached under any candidate key for this account; the first
    /// occurrence of an id wins across keys.
    fn gather_local_items(&self, uid: &str) -> Vec<Item> {
        let mut keys: Vec<String> = vec![self.profile_key.clone()];
        for candidate in [uid, self.user.email.as_str()] {
            if !candidate.is_empty() && !keys.iter().any(|k| k == candidate) {
                keys.push(candidate.to_string());
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::new();
        for key in &keys {
            for item in self.cache.load_items(key) {
                if seen.insert(item.id.clone()) {
                    out.push(item);
                }
            }
        }
        out
    }

    fn start_event_intake(self: &Arc<Self>) {
        let mut rx = self.cache.bus().subscribe(&self.profile_key);
        let session = Arc::clone(self);
        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(event) => session.handle_event(event),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        log::warn!("[sync] event intake lagged, skipped {skipped}");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        *self.event_task.lock().expect("session lock poisoned") = Some(task);
    }

    fn handle_event(self: &Arc<Self>, event: StoreEvent) {
        if self.handle.state() != SyncState::Ready {
            return;
        }

        match event {
            StoreEvent::ItemsUpdated { items } => {
                *self.items.lock().expect("session lock poisoned") = items;
                self.schedule_item_save();
            }
            StoreEvent::PreferencesUpdated { patch } => self.queue_preference_patch(patch),
            StoreEvent::CategoriesUpdated { categories } => {
                self.queue_preference_patch(UserPreferences {
                    categories: Some(categories),
                    ..UserPreferences::default()
                });
            }
            StoreEvent::ProfileUpdated { gender, .. } => {
                // Avatars stay on-device; only the gender syncs.
                if gender.is_some() {
                    self.queue_preference_patch(UserPreferences {
                        profile_gender: gender,
                        ..UserPreferences::default()
                    });
                }
            }
            StoreEvent::LanguageUpdated { locale } => {
                self.queue_preference_patch(UserPreferences {
                    locale: Some(locale),
                    ..UserPreferences::default()
                });
            }
        }
    }

    fn queue_preference_patch(self: &Arc<Self>, patch: UserPreferences) {
        self.pending_prefs
            .lock()
            .expect("session lock poisoned")
            .merge(&patch);
        let session = Arc::clone(self);
        self.prefs_debounce
            .schedule(async move { session.save_preferences_now().await });
    }

    /// Item saves are gated on remote availability; a failed save drops the
    /// gate until connectivity is reported back.
    fn schedule_item_save(self: &Arc<Self>) {
        if !self.handle.remote_available() {
            return;
        }
        let session = Arc::clone(self);
        self.item_debounce
            .schedule(async move { session.save_items_now().await });
    }

    async fn save_items_now(&self) {
        let Some(uid) = self.user.sync_uid() else {
            return;
        };
        let items = self.items.lock().expect("session lock poisoned").clone();
        let mut ctx = self.ctx.lock().await;
        if let Err(e) = self.wardrobe.save(uid, &items, &mut ctx).await {
            log::warn!("[sync] item save failed for {uid}: {e}");
            self.handle.set_remote_available(false);
        }
    }

    async fn save_preferences_now(&self) {
        let Some(uid) = self.user.sync_uid() else {
            return;
        };
        let patch = std::mem::take(
            &mut *self.pending_prefs.lock().expect("session lock poisoned"),
        );
        if patch.is_empty() {
            return;
        }
        if let Err(e) = self.preferences.save(uid, &patch).await {
            log::warn!("[sync] preference save failed for {uid}: {e}");
            self.handle.set_remote_available(false);
        }
    }

    /// Connectivity-regained hook: re-opens the item-save gate and writes
    /// the current list immediately instead of waiting out a debounce.
    pub async fn flush_now(&self) {
        if self.handle.state() != SyncState::Ready {
            return;
        }
        self.handle.set_remote_available(true);
        self.item_debounce.cancel();
        self.save_items_now().await;
    }

    /// Cancels hydration, pending saves and the event intake. Idempotent.
    pub fn shutdown(&self) {
        if self.shut_down.swap(true, Ordering::AcqRel) {
            return;
        }
        self.handle.cancel();
        self.item_debounce.cancel();
        self.prefs_debounce.cancel();
        if let Some(task) = self
            .event_task
            .lock()
            .expect("session lock poisoned")
            .take()
        {
            task.abort();
            self.cache.bus().unsubscribe(&self.profile_key);
        }
    }
}

impl Drop for SyncSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}
