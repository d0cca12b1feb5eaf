//! Integration tests for change notification between views.
//!
//! Views mounted independently of each other must all observe a write before
//! it returns, whoever made it, and must stop observing once unmounted.

#![allow(clippy::unwrap_used)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use manga_panel_client::FavoritesPanel;
use manga_panel_core::MangaId;
use manga_panel_integration_tests::{Browser, catalog, ids};

fn titles(panel: &FavoritesPanel) -> Vec<String> {
    panel.items().iter().map(|m| m.title.clone()).collect()
}

#[test]
fn test_every_mounted_view_rederives_after_a_write() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    let profile_grid = FavoritesPanel::mount(&tab.favorites, catalog());
    let sidebar = FavoritesPanel::mount(&tab.favorites, catalog());

    tab.favorites.add_favorite(&MangaId::from("m3"));
    tab.favorites.add_favorite(&MangaId::from("m1"));

    assert_eq!(titles(&profile_grid), ["Manga 3", "Manga 1"]);
    assert_eq!(sidebar.count(), 2);

    profile_grid.remove(&MangaId::from("m3"));
    assert_eq!(titles(&sidebar), ["Manga 1"]);
}

#[test]
fn test_views_follow_login_and_logout() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    tab.favorites.add_favorite(&MangaId::from("m1"));
    let panel = FavoritesPanel::mount(&tab.favorites, catalog());
    assert_eq!(titles(&panel), ["Manga 1"]);

    tab.session.login("a@x.com", "Ann").unwrap();
    assert!(panel.items().is_empty());

    tab.favorites.add_favorite(&MangaId::from("m2"));
    assert_eq!(titles(&panel), ["Manga 2"]);

    tab.session.logout();
    assert_eq!(titles(&panel), ["Manga 1"]);
}

#[test]
fn test_one_publish_per_write_seen_before_next_read() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    let observed: Rc<RefCell<Vec<Vec<MangaId>>>> = Rc::new(RefCell::new(Vec::new()));

    let store = tab.favorites.clone();
    let log = Rc::clone(&observed);
    let _subscription = tab
        .favorites
        .subscribe(move || log.borrow_mut().push(store.read_favorite_ids()));

    tab.favorites.add_favorite(&MangaId::from("m1"));
    tab.favorites.add_favorite(&MangaId::from("m2"));
    tab.favorites.remove_favorite(&MangaId::from("m1"));
    tab.favorites.clear_favorites();

    assert_eq!(
        *observed.borrow(),
        [ids(&["m1"]), ids(&["m1", "m2"]), ids(&["m2"]), ids(&[])]
    );
}

#[test]
fn test_panicking_view_does_not_block_others_or_the_write() {
    let browser = Browser::new();
    let tab = browser.open_tab();

    let _broken = tab.favorites.subscribe(|| panic!("render failed"));
    let panel = FavoritesPanel::mount(&tab.favorites, catalog());

    tab.favorites.add_favorite(&MangaId::from("m5"));

    assert_eq!(tab.favorites.read_favorite_ids(), ids(&["m5"]));
    assert_eq!(titles(&panel), ["Manga 5"]);
}

#[test]
fn test_unmounted_view_stops_observing() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    let calls = Rc::new(Cell::new(0));

    let counter = Rc::clone(&calls);
    let subscription = tab
        .favorites
        .subscribe(move || counter.set(counter.get() + 1));
    let panel = FavoritesPanel::mount(&tab.favorites, catalog());
    assert_eq!(tab.favorites.notifier().listener_count(), 2);

    tab.favorites.add_favorite(&MangaId::from("m1"));
    subscription.unsubscribe();
    panel.unmount();
    tab.favorites.add_favorite(&MangaId::from("m2"));

    assert_eq!(calls.get(), 1);
    assert_eq!(tab.favorites.notifier().listener_count(), 0);
}

#[test]
fn test_other_tab_refreshes_on_storage_event() {
    let browser = Browser::new();
    let writer = browser.open_tab();
    let reader = browser.open_tab();
    let panel = FavoritesPanel::mount(&reader.favorites, catalog());

    writer.favorites.add_favorite(&MangaId::from("m2"));
    assert!(panel.items().is_empty());

    assert!(reader.favorites.notify_external_change(Some("mp_favorites")));
    assert_eq!(titles(&panel), ["Manga 2"]);

    assert!(!reader.favorites.notify_external_change(Some("mp_favs_a@x.com")));
    assert_eq!(panel.refresh_count(), 2);
}
