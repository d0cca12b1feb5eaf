//! Read-only catalog lookup.
//!
//! The catalog is supplied externally (bundled data or a JSON file). The
//! favorites layer only needs [`Catalog::lookup`]; [`StaticCatalog`] also
//! exposes the home page sections.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Manga, MangaId};

/// Errors that can occur when building a [`StaticCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entries share the same ID.
    #[error("duplicate catalog id: {0}")]
    DuplicateId(MangaId),
}

/// Lookup of catalog items by ID.
pub trait Catalog {
    /// Returns the item with the given ID, if it is still listed.
    fn lookup(&self, id: &MangaId) -> Option<&Manga>;
}

/// An ordered, immutable catalog.
///
/// Order matters: the home page shows the head of the list as "latest" and
/// the tail as "popular".
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<Manga>,
    index: HashMap<MangaId, usize>,
}

impl StaticCatalog {
    /// Build a catalog from items in display order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an ID.
    pub fn new(items: Vec<Manga>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, index })
    }

    /// Parse a catalog from a JSON array of manga records.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or contains duplicate IDs.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Manga> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// All items in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &Manga> {
        self.items.iter()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The "latest chapters" section: the first `n` items.
    #[must_use]
    pub fn latest(&self, n: usize) -> &[Manga] {
        self.items.get(..n.min(self.items.len())).unwrap_or_default()
    }

    /// The "popular" section: the last `n` items, in catalog order.
    #[must_use]
    pub fn popular(&self, n: usize) -> &[Manga] {
        let start = self.items.len().saturating_sub(n);
        self.items.get(start..).unwrap_or_default()
    }
}

impl Catalog for StaticCatalog {
    fn lookup(&self, id: &MangaId) -> Option<&Manga> {
        self.index.get(id).and_then(|&position| self.items.get(position))
    }
}
