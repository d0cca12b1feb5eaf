//! Storage key names and the scoped favorites key.
//!
//! Favorites of a logged-in reader live under `mp_favs_<email>`; without a
//! session they live under the shared `mp_favorites` key. The key is derived
//! from the identity at the moment of every read and write and never cached:
//! a key cached across login/logout would read or overwrite another reader's
//! favorites.

use manga_panel_core::Identity;
use tracing::debug;

use crate::IdentityStore;

/// Default key holding the session identity in the volatile area.
pub const DEFAULT_USER_KEY: &str = "mp_user";

/// Default prefix of per-user favorites keys in the durable area.
pub const DEFAULT_FAVORITES_PREFIX: &str = "mp_favs_";

/// Default favorites key used when no one is logged in.
pub const DEFAULT_GLOBAL_FAVORITES_KEY: &str = "mp_favorites";

/// Names of the keys the client reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Key of the identity record in the volatile area.
    pub user: String,
    /// Prefix of per-user favorites keys; the email is appended verbatim.
    pub favorites_prefix: String,
    /// Favorites key for anonymous readers.
    pub global_favorites: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER_KEY.to_string(),
            favorites_prefix: DEFAULT_FAVORITES_PREFIX.to_string(),
            global_favorites: DEFAULT_GLOBAL_FAVORITES_KEY.to_string(),
        }
    }
}

impl StorageKeys {
    /// Favorites key for `identity`, or the global key when there is none.
    #[must_use]
    pub fn favorites_key_for(&self, identity: Option<&Identity>) -> String {
        identity.map_or_else(
            || self.global_favorites.clone(),
            |identity| format!("{}{}", self.favorites_prefix, identity.email),
        )
    }
}

/// Resolves the favorites key from the identity currently in the tab.
#[derive(Debug, Clone)]
pub struct ScopedKeyResolver {
    identity: IdentityStore,
    keys: StorageKeys,
}

impl ScopedKeyResolver {
    /// Resolver reading the identity from `identity`.
    #[must_use]
    pub const fn new(identity: IdentityStore, keys: StorageKeys) -> Self {
        Self { identity, keys }
    }

    /// The identity store this resolver reads.
    #[must_use]
    pub const fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// The configured key names.
    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Favorites key for whoever is logged in right now.
    ///
    /// Reads the identity store on every call. A missing or malformed
    /// identity resolves to the global key.
    #[must_use]
    pub fn resolve_favorites_key(&self) -> String {
        let current = self.identity.current_user();
        let key = self.keys.favorites_key_for(current.as_ref());
        debug!(key = %key, "Resolved favorites key");
        key
    }
}
