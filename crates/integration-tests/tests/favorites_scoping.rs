//! Integration tests for per-reader favorites scoping.
//!
//! Favorites written by one reader must never show up for another reader or
//! for the anonymous set, and login/logout must switch sets without moving
//! any data.

#![allow(clippy::unwrap_used)]

use manga_panel_client::StorageArea;
use manga_panel_core::MangaId;
use manga_panel_integration_tests::{Browser, ids};

// =============================================================================
// Read-after-write
// =============================================================================

#[test]
fn test_read_after_write_for_each_reader() {
    let browser = Browser::new();
    let tab = browser.open_tab();

    for (email, set) in [
        ("a@x.com", ids(&["m1", "m2"])),
        ("b@x.com", ids(&["m3"])),
        ("c@x.com", ids(&[])),
    ] {
        tab.session.login(email, "Reader").unwrap();
        tab.favorites.write_favorite_ids(&set);
        assert_eq!(tab.favorites.read_favorite_ids(), set, "reader {email}");
    }
}

// =============================================================================
// Key isolation
// =============================================================================

#[test]
fn test_favorites_of_one_reader_invisible_to_another() {
    let browser = Browser::new();
    let tab = browser.open_tab();

    tab.session.login("u1@x.com", "One").unwrap();
    tab.favorites.write_favorite_ids(&ids(&["a"]));

    tab.session.login("u2@x.com", "Two").unwrap();
    assert!(tab.favorites.read_favorite_ids().is_empty());
}

#[test]
fn test_identity_written_elsewhere_keeps_reader_out_of_anonymous_set() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    tab.favorites.add_favorite(&MangaId::from("shared"));

    tab.volatile
        .set_item("mp_user", r#"{"email":"bob","name":"Bob"}"#)
        .unwrap();
    assert!(tab.session.is_logged_in());
    assert!(tab.favorites.read_favorite_ids().is_empty());
    tab.favorites.add_favorite(&MangaId::from("m1"));

    tab.volatile.set_item("mp_user", r#"{"email":"a@x.com"}"#).unwrap();
    assert_eq!(tab.session.profile().unwrap().initials, "");
    tab.favorites.add_favorite(&MangaId::from("m2"));

    assert_eq!(
        browser.durable().get_item("mp_favs_bob").unwrap().as_deref(),
        Some(r#"["m1"]"#)
    );
    assert_eq!(
        browser.durable().get_item("mp_favs_a@x.com").unwrap().as_deref(),
        Some(r#"["m2"]"#)
    );
    assert_eq!(
        browser.durable().get_item("mp_favorites").unwrap().as_deref(),
        Some(r#"["shared"]"#)
    );
}

#[test]
fn test_anonymous_then_login_then_logout_scenario() {
    let browser = Browser::new();
    let tab = browser.open_tab();

    tab.favorites.add_favorite(&MangaId::from("m1"));
    assert_eq!(
        browser.durable().get_item("mp_favorites").unwrap().as_deref(),
        Some(r#"["m1"]"#)
    );

    tab.session.login("a@x.com", "Ann").unwrap();
    assert!(tab.favorites.read_favorite_ids().is_empty());

    tab.favorites.add_favorite(&MangaId::from("m2"));
    assert_eq!(
        browser
            .durable()
            .get_item("mp_favs_a@x.com")
            .unwrap()
            .as_deref(),
        Some(r#"["m2"]"#)
    );

    tab.session.logout();
    assert_eq!(tab.favorites.read_favorite_ids(), ids(&["m1"]));
}

#[test]
fn test_favorites_survive_logout_and_relogin() {
    let browser = Browser::new();
    let tab = browser.open_tab();

    tab.session.login("a@x.com", "Ann").unwrap();
    tab.favorites.add_favorite(&MangaId::from("m4"));
    tab.session.logout();
    assert!(tab.favorites.read_favorite_ids().is_empty());

    tab.session.login("a@x.com", "Ann").unwrap();
    assert_eq!(tab.favorites.read_favorite_ids(), ids(&["m4"]));
}

// =============================================================================
// Tabs
// =============================================================================

#[test]
fn test_each_tab_has_its_own_session() {
    let browser = Browser::new();
    let first = browser.open_tab();
    let second = browser.open_tab();

    first.session.login("a@x.com", "Ann").unwrap();
    assert!(first.session.is_logged_in());
    assert!(!second.session.is_logged_in());

    first.favorites.add_favorite(&MangaId::from("m1"));
    assert!(second.favorites.read_favorite_ids().is_empty());
}

#[test]
fn test_same_reader_in_two_tabs_shares_durable_favorites() {
    let browser = Browser::new();
    let first = browser.open_tab();
    let second = browser.open_tab();
    first.session.login("a@x.com", "Ann").unwrap();
    second.session.login("a@x.com", "Ann").unwrap();

    first.favorites.add_favorite(&MangaId::from("m1"));
    second.favorites.add_favorite(&MangaId::from("m2"));

    assert_eq!(first.favorites.read_favorite_ids(), ids(&["m1", "m2"]));
}

#[test]
fn test_same_key_writes_are_last_write_wins() {
    let browser = Browser::new();
    let first = browser.open_tab();
    let second = browser.open_tab();

    let stale = first.favorites.read_favorite_ids();
    second.favorites.write_favorite_ids(&ids(&["m5"]));
    first.favorites.write_favorite_ids(&stale);

    assert!(second.favorites.read_favorite_ids().is_empty());
}

// =============================================================================
// Set semantics
// =============================================================================

#[test]
fn test_set_operations() {
    let browser = Browser::new();
    let tab = browser.open_tab();
    let favorites = &tab.favorites;

    favorites.add_favorite(&MangaId::from("m2"));
    favorites.add_favorite(&MangaId::from("m1"));
    favorites.add_favorite(&MangaId::from("m2"));
    assert_eq!(favorites.read_favorite_ids(), ids(&["m2", "m1"]));

    favorites.remove_favorite(&MangaId::from("m9"));
    assert_eq!(favorites.read_favorite_ids(), ids(&["m2", "m1"]));

    favorites.clear_favorites();
    assert!(favorites.read_favorite_ids().is_empty());
}
