//! Mounted favorites consumer.
//!
//! A [`FavoritesPanel`] is what a favorites screen (the profile page grid, a
//! sidebar counter) holds while it is on screen. It derives its items when
//! mounted, re-derives them on every change notification, whoever wrote, and
//! stops listening when unmounted or dropped.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use manga_panel_core::{Catalog, Manga, MangaId};
use tracing::trace;

use crate::{FavoritesStore, Subscription, build_favorite_items};

#[derive(Debug, Default)]
struct PanelState {
    ids: Vec<MangaId>,
    items: Vec<Manga>,
    refreshes: usize,
}

/// A mounted view of the current reader's favorite manga.
pub struct FavoritesPanel {
    state: Rc<RefCell<PanelState>>,
    store: FavoritesStore,
    _subscription: Subscription,
}

impl fmt::Debug for FavoritesPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesPanel")
            .field("state", &self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl FavoritesPanel {
    /// Mount a panel: derive the items now and subscribe to `store`.
    #[must_use]
    pub fn mount<C>(store: &FavoritesStore, catalog: Rc<C>) -> Self
    where
        C: Catalog + 'static,
    {
        let state = Rc::new(RefCell::new(PanelState::default()));
        refresh(&state, store, &*catalog);

        let weak: Weak<RefCell<PanelState>> = Rc::downgrade(&state);
        let listener_store = store.clone();
        let subscription = store.subscribe(move || {
            if let Some(state) = weak.upgrade() {
                refresh(&state, &listener_store, &*catalog);
            }
        });

        Self {
            state,
            store: store.clone(),
            _subscription: subscription,
        }
    }

    /// Favorite items in the order they were added. IDs no longer in the
    /// catalog are left out.
    #[must_use]
    pub fn items(&self) -> Ref<'_, [Manga]> {
        Ref::map(self.state.borrow(), |state| state.items.as_slice())
    }

    /// Favorite IDs as last read, including IDs missing from the catalog.
    #[must_use]
    pub fn ids(&self) -> Ref<'_, [MangaId]> {
        Ref::map(self.state.borrow(), |state| state.ids.as_slice())
    }

    /// Number of favorite IDs (the sidebar badge counts IDs, not items).
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.borrow().ids.len()
    }

    /// How many times the panel has derived its items, including on mount.
    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.state.borrow().refreshes
    }

    /// Remove one favorite (the "×" button on a card).
    pub fn remove(&self, id: &MangaId) {
        self.store.remove_favorite(id);
    }

    /// Remove every favorite (the "clear all" button).
    pub fn clear(&self) {
        self.store.clear_favorites();
    }

    /// Stop listening. Equivalent to dropping the panel.
    pub fn unmount(self) {
        drop(self);
    }
}

fn refresh(state: &RefCell<PanelState>, store: &FavoritesStore, catalog: &dyn Catalog) {
    let ids = store.read_favorite_ids();
    let items = build_favorite_items(&ids, |id| catalog.lookup(id).cloned());
    let mut state = state.borrow_mut();
    state.ids = ids;
    state.items = items;
    state.refreshes += 1;
    trace!(
        favorites = state.ids.len(),
        items = state.items.len(),
        "Favorites panel refreshed"
    );
}
