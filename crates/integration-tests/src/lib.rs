//! Integration tests for Manga Panel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p manga-panel-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `favorites_scoping` - Per-reader key isolation and the login/logout scenario
//! - `favorites_sync` - Change notification across independently mounted views
//! - `storage_failures` - Corrupt and unavailable storage never reach the views
//!
//! This library holds the shared fixtures: a [`Browser`] owns one durable
//! area, and every [`Tab`] opened in it gets its own volatile area, the way
//! `localStorage` is shared by same-origin tabs and `sessionStorage` is not.

use std::rc::Rc;

use manga_panel_client::{FavoritesStore, MemoryStorage, Session, StorageKeys};
use manga_panel_core::{Manga, MangaId, StaticCatalog};

/// Install a test subscriber so `RUST_LOG=debug` shows store logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// A browser profile: one durable area shared by its tabs.
#[derive(Debug, Default)]
pub struct Browser {
    durable: Rc<MemoryStorage>,
}

impl Browser {
    /// A browser with empty storage.
    #[must_use]
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    /// A browser whose durable area is `durable`.
    #[must_use]
    pub fn with_durable(durable: MemoryStorage) -> Self {
        init_tracing();
        Self {
            durable: Rc::new(durable),
        }
    }

    /// The shared durable area.
    #[must_use]
    pub fn durable(&self) -> &Rc<MemoryStorage> {
        &self.durable
    }

    /// Open a tab with a fresh volatile area.
    #[must_use]
    pub fn open_tab(&self) -> Tab {
        let volatile = Rc::new(MemoryStorage::new());
        let favorites = FavoritesStore::new(
            self.durable.clone(),
            volatile.clone(),
            StorageKeys::default(),
        );
        Tab {
            session: Session::new(favorites.clone()),
            favorites,
            volatile,
        }
    }
}

/// One tab: its own session over the browser's shared favorites storage.
#[derive(Debug)]
pub struct Tab {
    /// Favorites store of this tab.
    pub favorites: FavoritesStore,
    /// Login state of this tab.
    pub session: Session,
    /// This tab's volatile area.
    pub volatile: Rc<MemoryStorage>,
}

/// Build IDs from string slices.
#[must_use]
pub fn ids(raw: &[&str]) -> Vec<MangaId> {
    raw.iter().map(|id| MangaId::from(*id)).collect()
}

/// A small catalog: `m1` to `m5`, titled `Manga 1` to `Manga 5`.
#[must_use]
pub fn catalog() -> Rc<StaticCatalog> {
    let items = (1..=5)
        .map(|n| Manga::new(format!("m{n}"), format!("Manga {n}")))
        .collect();
    Rc::new(StaticCatalog::new(items).unwrap_or_default())
}
