//! Login, logout and the profile summary.
//!
//! There is no credential check: logging in stores the identity for the tab.
//! Because favorites are keyed by the identity, a login or logout changes
//! which set every mounted view should show. Both therefore publish a change
//! notification after updating the identity.

use manga_panel_core::{Email, EmailError, Identity};
use tracing::info;

use crate::FavoritesStore;

/// What the profile page shows for the logged-in reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Email,
    /// Avatar initials (see [`Identity::initials`]).
    pub initials: String,
    /// Number of favorites of this reader.
    pub favorites_count: usize,
}

/// The tab's login state.
#[derive(Debug, Clone)]
pub struct Session {
    favorites: FavoritesStore,
}

impl Session {
    /// Session over the identity store that scopes `favorites`.
    #[must_use]
    pub const fn new(favorites: FavoritesStore) -> Self {
        Self { favorites }
    }

    /// The favorites store this session scopes.
    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// The logged-in reader, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<Identity> {
        self.favorites.identity().current_user()
    }

    /// Whether someone is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Log in as `email`, replacing any current session.
    ///
    /// Anonymous favorites are not carried over to the reader's own set.
    ///
    /// # Errors
    ///
    /// Returns an error if `email` is not a valid address. The current
    /// session is left unchanged.
    pub fn login(&self, email: &str, name: &str) -> Result<Identity, EmailError> {
        let identity = Identity::new(Email::parse(email.trim())?, name.trim());
        self.favorites.identity().set_current_user(&identity);
        info!(email = %identity.email, "Logged in");
        self.favorites.notifier().publish();
        Ok(identity)
    }

    /// Log out. Favorites stay stored under the reader's key.
    pub fn logout(&self) {
        let previous = self.current_user();
        self.favorites.identity().clear_current_user();
        if let Some(identity) = previous {
            info!(email = %identity.email, "Logged out");
        }
        self.favorites.notifier().publish();
    }

    /// Profile page data, or `None` when logged out.
    #[must_use]
    pub fn profile(&self) -> Option<ProfileSummary> {
        let identity = self.current_user()?;
        Some(ProfileSummary {
            initials: identity.initials(),
            favorites_count: self.favorites.read_favorite_ids().len(),
            name: identity.name,
            email: identity.email,
        })
    }
}
