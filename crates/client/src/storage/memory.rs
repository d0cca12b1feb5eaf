//! In-memory storage area.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use super::StorageArea;
use crate::StorageError;

/// Storage area held in memory.
///
/// Used as the volatile area when nothing outlives the process, and as the
/// injectable fake in tests. It can simulate the browser's failure modes: a
/// byte quota ([`MemoryStorage::with_quota`]) and disabled storage
/// ([`MemoryStorage::disabled`], [`MemoryStorage::set_available`]).
#[derive(Debug)]
pub struct MemoryStorage {
    entries: RefCell<BTreeMap<String, String>>,
    quota: Option<usize>,
    available: Cell<bool>,
}

impl MemoryStorage {
    /// An empty, unlimited storage area.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota: None,
            available: Cell::new(true),
        }
    }

    /// An empty storage area that rejects writes once keys plus values
    /// exceed `bytes`.
    #[must_use]
    pub const fn with_quota(bytes: usize) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota: Some(bytes),
            available: Cell::new(true),
        }
    }

    /// A storage area that fails every operation, like storage disabled by
    /// browser privacy settings.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            quota: None,
            available: Cell::new(false),
        }
    }

    /// Enable or disable the area. Stored entries are kept while disabled.
    pub fn set_available(&self, available: bool) {
        self.available.set(available);
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the area holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn ensure_available(&self) -> Result<(), StorageError> {
        if self.available.get() {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }

    fn used_bytes_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageArea for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.ensure_available()?;
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        if let Some(quota) = self.quota {
            if self.used_bytes_without(key) + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.ensure_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
