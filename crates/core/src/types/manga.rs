//! Catalog record for a manga series.

use serde::{Deserialize, Serialize};

use crate::MangaId;

/// A manga as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manga {
    /// Catalog ID (slug).
    pub id: MangaId,
    /// Series title.
    pub title: String,
    /// Author credit.
    #[serde(default)]
    pub author: String,
    /// Cover image URL.
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Number of published chapters.
    #[serde(default)]
    pub chapter_count: u32,
    /// Most recent chapter number, when known.
    #[serde(default)]
    pub latest_chapter: Option<u32>,
}

impl Manga {
    /// Create a catalog record with only an ID and a title.
    #[must_use]
    pub fn new(id: impl Into<MangaId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: String::new(),
            cover_url: None,
            genres: Vec::new(),
            chapter_count: 0,
            latest_chapter: None,
        }
    }
}
