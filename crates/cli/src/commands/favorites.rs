//! Favorites commands.
//!
//! Operate on the current reader's favorites, or on the anonymous set when
//! nobody is logged in.

use manga_panel_client::FavoritesPanel;
use manga_panel_core::{Catalog, MangaId};

use super::Context;

/// Print favorite manga, in the order they were added.
#[allow(clippy::print_stdout)]
pub fn list(ctx: &Context) {
    for line in render_list(ctx) {
        println!("{line}");
    }
}

/// Favorites listing, one line per manga.
pub fn render_list(ctx: &Context) -> Vec<String> {
    let panel = FavoritesPanel::mount(&ctx.favorites, ctx.catalog.clone());
    let items = panel.items();

    if items.is_empty() {
        return vec!["No favorites yet. Add one with `mp-cli favorites add <id>`.".to_string()];
    }

    let hidden = panel.count().saturating_sub(items.len());
    if hidden > 0 {
        tracing::debug!(hidden, "Favorites no longer in the catalog");
    }

    items
        .iter()
        .map(|manga| format!("{:<20} {}", manga.id, manga.title))
        .collect()
}

/// Add `id` to favorites.
pub fn add(ctx: &Context, id: &str) {
    let id = MangaId::from(id);
    warn_if_unknown(ctx, &id);
    ctx.favorites.add_favorite(&id);
    tracing::info!(id = %id, "Added to favorites");
}

/// Remove `id` from favorites.
pub fn remove(ctx: &Context, id: &str) {
    let id = MangaId::from(id);
    if !ctx.favorites.contains(&id) {
        tracing::info!(id = %id, "Not a favorite");
    }
    ctx.favorites.remove_favorite(&id);
}

/// Toggle `id`.
pub fn toggle(ctx: &Context, id: &str) {
    let id = MangaId::from(id);
    if ctx.favorites.toggle_favorite(&id) {
        warn_if_unknown(ctx, &id);
        tracing::info!(id = %id, "Added to favorites");
    } else {
        tracing::info!(id = %id, "Removed from favorites");
    }
}

/// Remove every favorite.
pub fn clear(ctx: &Context) {
    ctx.favorites.clear_favorites();
    tracing::info!("Favorites cleared");
}

fn warn_if_unknown(ctx: &Context, id: &MangaId) {
    if ctx.catalog.lookup(id).is_none() {
        tracing::warn!(id = %id, "Not in the catalog; it will not be listed until it is");
    }
}
