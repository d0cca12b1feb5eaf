//! Catalog commands: the home page sections.

use manga_panel_core::Manga;

use super::Context;

/// Print the "latest chapters" section.
#[allow(clippy::print_stdout)]
pub fn latest(ctx: &Context, n: usize) {
    for line in render_section(ctx.catalog.latest(n)) {
        println!("{line}");
    }
}

/// Print the "popular" section.
#[allow(clippy::print_stdout)]
pub fn popular(ctx: &Context, n: usize) {
    for line in render_section(ctx.catalog.popular(n)) {
        println!("{line}");
    }
}

/// One line per manga: ID, title, and latest chapter when known.
pub fn render_section(items: &[Manga]) -> Vec<String> {
    items
        .iter()
        .map(|manga| match manga.latest_chapter {
            Some(chapter) => format!("{:<20} {} (ch. {chapter})", manga.id, manga.title),
            None => format!("{:<20} {}", manga.id, manga.title),
        })
        .collect()
}
