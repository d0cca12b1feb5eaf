//! Catalog item identifiers.
//!
//! Catalog IDs are opaque slugs supplied by the static catalog (e.g.
//! `"one-piece"`). Favorites are stored as plain JSON strings, so the wrapper
//! is `serde(transparent)`.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a manga in the catalog.
///
/// Wrapping the slug keeps catalog IDs from being mixed up with storage keys
/// or email addresses, which are also plain strings.
///
/// # Example
///
/// ```rust
/// # use manga_panel_core::MangaId;
/// let id = MangaId::from("one-piece");
/// assert_eq!(id.as_str(), "one-piece");
/// assert_eq!(serde_json::to_string(&id).unwrap(), "\"one-piece\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MangaId(String);

impl MangaId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MangaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MangaId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for MangaId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<MangaId> for String {
    fn from(id: MangaId) -> Self {
        id.0
    }
}

impl AsRef<str> for MangaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for MangaId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for MangaId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
