//! Derived View Builder.

use std::collections::HashSet;

use manga_panel_core::MangaId;

/// Join favorite IDs against the catalog.
///
/// Returns the item for each ID that `lookup` still resolves, in the order of
/// `ids`. IDs the catalog no longer lists are dropped silently. A repeated ID
/// yields its item once, at its first position. Pure; safe to call on every
/// notification.
///
/// ```
/// use manga_panel_client::build_favorite_items;
/// use manga_panel_core::{Catalog, Manga, MangaId, StaticCatalog};
///
/// let catalog = StaticCatalog::new(vec![Manga::new("y", "Yotsuba")]).unwrap();
/// let ids = [MangaId::from("x"), MangaId::from("y")];
/// let items = build_favorite_items(&ids, |id| catalog.lookup(id).cloned());
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].title, "Yotsuba");
/// ```
pub fn build_favorite_items<T, F>(ids: &[MangaId], lookup: F) -> Vec<T>
where
    F: FnMut(&MangaId) -> Option<T>,
{
    let mut seen: HashSet<&MangaId> = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| seen.insert(*id))
        .filter_map(lookup)
        .collect()
}
