//! Key-value storage areas.
//!
//! A storage area maps string keys to string values, like the browser's
//! `localStorage` and `sessionStorage`. The stores in this crate only talk to
//! the [`StorageArea`] trait, so tests inject [`MemoryStorage`], the CLI uses
//! [`FileStorage`], and the wasm front end uses `BrowserStorage` (feature
//! `web`).

mod file;
mod memory;

#[cfg(feature = "web")]
mod browser;

pub use file::FileStorage;
pub use memory::MemoryStorage;

#[cfg(feature = "web")]
pub use browser::BrowserStorage;

use crate::StorageError;

/// A string key-value storage area.
///
/// Receivers are `&self`: areas are shared by every store in the tab and use
/// interior mutability, the same way browser storage does. A successful
/// `set_item` replaces the whole value; a failed one leaves the old value.
pub trait StorageArea {
    /// Returns the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the area cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the area is unavailable or the write does not fit.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the area is unavailable.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
