//! Favorites Store: the reader's favorited catalog IDs.
//!
//! Favorites are a JSON array of IDs in the durable storage area, under the
//! key resolved from the current identity (see [`crate::keys`]). The key is
//! resolved again on every read and every write, never carried from one to
//! the other, so a login or logout between the two cannot redirect a write
//! into the wrong reader's set.
//!
//! Every write is followed by a [`ChangeNotifier::publish`], whether or not
//! the storage accepted it. Reads never fail: a missing key, corrupt JSON or
//! unreadable storage all read as an empty set.

use std::fmt;
use std::rc::Rc;

use manga_panel_core::MangaId;
use tracing::{debug, warn};

use crate::{
    ChangeNotifier, IdentityStore, ScopedKeyResolver, StorageArea, StorageKeys, Subscription,
};

/// Decode a stored favorites array, dropping repeated IDs (first occurrence
/// wins).
///
/// # Errors
///
/// Returns an error if `raw` is not a JSON array of strings.
pub fn decode_favorite_ids(raw: &str) -> Result<Vec<MangaId>, serde_json::Error> {
    let ids: Vec<MangaId> = serde_json::from_str(raw)?;
    let mut unique: Vec<MangaId> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}

/// Per-reader favorites over a durable storage area.
///
/// Cheap to clone; clones share the storage areas and the notifier.
#[derive(Clone)]
pub struct FavoritesStore {
    durable: Rc<dyn StorageArea>,
    resolver: ScopedKeyResolver,
    notifier: ChangeNotifier,
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("resolver", &self.resolver)
            .field("notifier", &self.notifier)
            .finish_non_exhaustive()
    }
}

impl FavoritesStore {
    /// Favorites kept in `durable`, scoped by the identity kept in `volatile`.
    #[must_use]
    pub fn new(
        durable: Rc<dyn StorageArea>,
        volatile: Rc<dyn StorageArea>,
        keys: StorageKeys,
    ) -> Self {
        let identity = IdentityStore::new(volatile, &keys);
        Self::with_identity(durable, identity, keys)
    }

    /// Favorites kept in `durable`, scoped by an existing identity store.
    #[must_use]
    pub fn with_identity(
        durable: Rc<dyn StorageArea>,
        identity: IdentityStore,
        keys: StorageKeys,
    ) -> Self {
        Self {
            durable,
            resolver: ScopedKeyResolver::new(identity, keys),
            notifier: ChangeNotifier::new(),
        }
    }

    /// The identity store used to scope favorites.
    #[must_use]
    pub const fn identity(&self) -> &IdentityStore {
        self.resolver.identity()
    }

    /// The scoped key resolver.
    #[must_use]
    pub const fn resolver(&self) -> &ScopedKeyResolver {
        &self.resolver
    }

    /// The notifier published after every write.
    #[must_use]
    pub const fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }

    /// Register a change listener. See [`ChangeNotifier::subscribe`].
    #[must_use = "dropping the subscription unsubscribes the listener immediately"]
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Subscription {
        self.notifier.subscribe(listener)
    }

    /// Favorite IDs of the current reader, in the order they were added.
    #[must_use]
    pub fn read_favorite_ids(&self) -> Vec<MangaId> {
        let key = self.resolver.resolve_favorites_key();
        let raw = match self.durable.get_item(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(key = %key, error = %err, "Failed to read favorites");
                return Vec::new();
            }
        };

        decode_favorite_ids(&raw).unwrap_or_else(|err| {
            debug!(key = %key, error = %err, "Ignoring malformed favorites");
            Vec::new()
        })
    }

    /// Replace the current reader's favorites with `ids`, then publish.
    ///
    /// The set is written as one value, so storage holds either the old or
    /// the new set. A failed write is logged and leaves the old set.
    pub fn write_favorite_ids(&self, ids: &[MangaId]) {
        let key = self.resolver.resolve_favorites_key();
        match serde_json::to_string(ids) {
            Ok(json) => match self.durable.set_item(&key, &json) {
                Ok(()) => debug!(key = %key, count = ids.len(), "Stored favorites"),
                Err(err) => warn!(key = %key, error = %err, "Failed to store favorites"),
            },
            Err(err) => warn!(key = %key, error = %err, "Failed to encode favorites"),
        }
        self.notifier.publish();
    }

    /// Whether `id` is one of the current reader's favorites.
    #[must_use]
    pub fn contains(&self, id: &MangaId) -> bool {
        self.read_favorite_ids().contains(id)
    }

    /// Append `id` unless it is already a favorite. Always writes.
    pub fn add_favorite(&self, id: &MangaId) {
        let mut ids = self.read_favorite_ids();
        if !ids.contains(id) {
            ids.push(id.clone());
        }
        self.write_favorite_ids(&ids);
    }

    /// Remove `id`, keeping the order of the others. Always writes.
    pub fn remove_favorite(&self, id: &MangaId) {
        let mut ids = self.read_favorite_ids();
        ids.retain(|existing| existing != id);
        self.write_favorite_ids(&ids);
    }

    /// Add `id` if absent, remove it if present (the heart button on a card).
    /// Returns whether `id` is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &MangaId) -> bool {
        if self.contains(id) {
            self.remove_favorite(id);
            false
        } else {
            self.add_favorite(id);
            true
        }
    }

    /// Empty the current reader's favorites.
    pub fn clear_favorites(&self) {
        self.write_favorite_ids(&[]);
    }

    /// Re-publish after another context (tab, process) changed the durable
    /// area.
    ///
    /// `key` is the changed key, or `None` when the whole area was cleared.
    /// Changes to other readers' keys are ignored. Returns whether listeners
    /// were notified.
    pub fn notify_external_change(&self, key: Option<&str>) -> bool {
        let relevant = key.is_none_or(|key| key == self.resolver.resolve_favorites_key());
        if relevant {
            debug!(key = ?key, "External favorites change");
            self.notifier.publish();
        }
        relevant
    }
}
