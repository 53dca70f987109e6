use std::cell::Cell;
use std::rc::Rc;
use crate::tests::common::{ mocks::*, setup };
use crate::utils::{ MemoryStore, PreferenceStore, ThemeFlag, ThemePreference, ThemeState, UnavailableStore };

#[test]
fn test_stored_choice_wins_over_ambient() {
    setup();
    for stored in [ThemeFlag::Dark, ThemeFlag::Light] {
        for ambient in [ambient_dark as fn() -> bool, ambient_light] {
            let store = MemoryStore::with_entry("theme", stored.as_str());
            let preference = ThemePreference::new(store, ambient);
            assert_eq!(preference.resolve(), stored);
        }
    }
}

#[test]
fn test_absent_choice_follows_ambient() {
    setup();
    let dark = ThemePreference::new(MemoryStore::new(), ambient_dark);
    assert_eq!(dark.resolve(), ThemeFlag::Dark);

    let light = ThemePreference::new(MemoryStore::new(), ambient_light);
    assert_eq!(light.resolve(), ThemeFlag::Light);
}

#[test]
fn test_stored_light_overrides_dark_ambient() {
    setup();
    let preference = ThemePreference::new(MemoryStore::with_entry("theme", "light"), ambient_dark);
    assert_eq!(preference.resolve(), ThemeFlag::Light);
}

#[test]
fn test_choice_survives_into_next_session() {
    setup();
    let origin = MemoryStore::new();

    let first = ThemePreference::new(origin.clone(), ambient_light);
    first.set(ThemeFlag::Dark);
    let second = ThemePreference::new(origin.clone(), ambient_light);
    assert_eq!(second.resolve(), ThemeFlag::Dark);

    second.set(ThemeFlag::Light);
    let third = ThemePreference::new(origin, ambient_dark);
    assert_eq!(third.resolve(), ThemeFlag::Light);
}

#[test]
fn test_set_writes_storage_literal_under_theme_key() {
    setup();
    let origin = MemoryStore::new();
    let preference = ThemePreference::new(origin.clone(), ambient_light);
    assert_eq!(preference.key(), "theme");

    preference.set(ThemeFlag::Dark);
    assert_eq!(origin.get("theme").unwrap(), Some("dark".to_string()));
    assert_eq!(origin.len(), 1);
}

#[test]
fn test_setting_same_value_twice_is_idempotent() {
    setup();
    let store = CountingStore::new();
    let preference = ThemePreference::new(store.clone(), ambient_light);

    preference.set(ThemeFlag::Dark);
    preference.set(ThemeFlag::Dark);

    assert_eq!(store.writes.get(), 2);
    assert_eq!(store.inner.get("theme").unwrap(), Some("dark".to_string()));
    assert_eq!(store.inner.len(), 1);
}

#[test]
fn test_last_set_wins() {
    setup();
    let origin = MemoryStore::new();
    let preference = ThemePreference::new(origin.clone(), ambient_dark);

    preference.set(ThemeFlag::Dark);
    preference.set(ThemeFlag::Light);

    assert_eq!(origin.get("theme").unwrap(), Some("light".to_string()));
    assert_eq!(preference.resolve(), ThemeFlag::Light);
}

#[test]
fn test_cleared_store_falls_back_to_ambient() {
    setup();
    let origin = MemoryStore::with_entry("theme", "light");
    origin.clear("theme");
    let preference = ThemePreference::new(origin, ambient_dark);
    assert_eq!(preference.stored(), None);
    assert_eq!(preference.resolve(), ThemeFlag::Dark);
}

#[test]
fn test_empty_stored_value_counts_as_absent() {
    setup();
    let preference = ThemePreference::new(MemoryStore::with_entry("theme", ""), ambient_dark);
    assert_eq!(preference.resolve(), ThemeFlag::Dark);
}

#[test]
fn test_unrecognized_stored_value_reads_as_light() {
    setup();
    let preference = ThemePreference::new(MemoryStore::with_entry("theme", "sepia"), ambient_dark);
    assert_eq!(preference.resolve(), ThemeFlag::Light);
}

#[test]
fn test_unavailable_store_uses_ambient_and_ignores_writes() {
    setup();
    let preference = ThemePreference::new(UnavailableStore::new("storage blocked"), ambient_dark);
    assert_eq!(preference.resolve(), ThemeFlag::Dark);

    preference.set(ThemeFlag::Light);
    assert_eq!(preference.resolve(), ThemeFlag::Dark);
}

#[test]
fn test_rejected_write_keeps_session_theme() {
    setup();
    let preference = ThemePreference::new(ReadOnlyStore::default(), ambient_light);
    let mut state = ThemeState::resolve(&preference);
    assert!(!state.is_dark());

    assert_eq!(state.toggle(&preference), ThemeFlag::Dark);
    assert!(state.is_dark());
    assert_eq!(preference.stored(), None);
}

#[test]
fn test_ambient_is_only_queried_without_stored_choice() {
    setup();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let ambient = move || {
        counter.set(counter.get() + 1);
        true
    };
    let origin = MemoryStore::with_entry("theme", "light");
    let preference = ThemePreference::new(origin.clone(), ambient);

    assert_eq!(preference.resolve(), ThemeFlag::Light);
    assert_eq!(calls.get(), 0);

    origin.clear("theme");
    assert_eq!(preference.resolve(), ThemeFlag::Dark);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_custom_key() {
    setup();
    let origin = MemoryStore::new();
    let preference = ThemePreference::new(origin.clone(), ambient_light).with_key("portfolio-theme");
    preference.set(ThemeFlag::Dark);
    assert_eq!(origin.get("portfolio-theme").unwrap(), Some("dark".to_string()));
    assert_eq!(origin.get("theme").unwrap(), None);
}

#[test]
fn test_toggle_persists_and_displays_same_flag() {
    setup();
    let origin = MemoryStore::new();
    let preference = ThemePreference::new(origin.clone(), ambient_dark);
    let mut state = ThemeState::resolve(&preference);
    assert_eq!(state.flag, ThemeFlag::Dark);

    let shown = state.toggle(&preference);
    assert_eq!(shown, ThemeFlag::Light);
    assert_eq!(state.root_class(), "");
    assert_eq!(origin.get("theme").unwrap(), Some("light".to_string()));

    let shown = state.toggle(&preference);
    assert_eq!(shown, ThemeFlag::Dark);
    assert_eq!(ThemePreference::new(origin, ambient_light).resolve(), ThemeFlag::Dark);
}
