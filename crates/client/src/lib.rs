//! Manga Panel Client - session identity and per-user favorites.
//!
//! This crate is the synchronization layer shared by every screen of the
//! front end. It keeps the logged-in reader in a tab-scoped (volatile)
//! storage area, keeps each reader's favorites in a durable storage area under
//! a key namespaced by their email, and tells every mounted view when the
//! favorites change so it can re-derive what it shows.
//!
//! # Architecture
//!
//! - [`storage`] - The [`StorageArea`] seam plus in-memory, file and browser backends
//! - [`identity`] - Identity Store over the volatile area
//! - [`keys`] - Storage key names and the scoped favorites key resolver
//! - [`favorites`] - Favorites Store over the durable area
//! - [`notifier`] - Synchronous change notification with per-listener isolation
//! - [`view`] - Joins favorite IDs against the catalog
//! - [`panel`] - A mounted consumer that re-derives on every notification
//! - [`session`] - Login/logout and the profile summary
//! - [`config`] - Environment configuration
//!
//! Everything runs on one thread: stores are cheap to clone and share state
//! through `Rc`, and no operation suspends.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use manga_panel_client::{FavoritesStore, MemoryStorage, Session, StorageKeys};
//! use manga_panel_core::MangaId;
//!
//! let store = FavoritesStore::new(
//!     Rc::new(MemoryStorage::new()),
//!     Rc::new(MemoryStorage::new()),
//!     StorageKeys::default(),
//! );
//! let session = Session::new(store.clone());
//!
//! store.add_favorite(&MangaId::from("m1"));
//! session.login("a@x.com", "Ann").unwrap();
//! assert!(store.read_favorite_ids().is_empty());
//! session.logout();
//! assert_eq!(store.read_favorite_ids(), vec![MangaId::from("m1")]);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod favorites;
pub mod identity;
pub mod keys;
pub mod notifier;
pub mod panel;
pub mod session;
pub mod storage;
pub mod view;

pub use config::{ClientConfig, ConfigError};
pub use error::StorageError;
pub use favorites::FavoritesStore;
pub use identity::{DecodeError, IdentityStore, decode_identity};
pub use keys::{ScopedKeyResolver, StorageKeys};
pub use notifier::{ChangeNotifier, Subscription};
pub use panel::FavoritesPanel;
pub use session::{ProfileSummary, Session};
pub use storage::{FileStorage, MemoryStorage, StorageArea};
pub use view::build_favorite_items;

#[cfg(feature = "web")]
pub use storage::BrowserStorage;
