use super::*;
use crate::store::MemoryStore;

// =============================================================
// PresentationState
// =============================================================

#[test]
fn new_state_shows_quoted_quote() {
    let state = PresentationState::new("Socks are foot sleeping bags.");
    assert!(!state.showing_explanation());
    assert_eq!(state.displayed_text(), "\"Socks are foot sleeping bags.\"");
    assert_eq!(state.toggle_label(), WHY_LABEL);
}

#[test]
fn toggle_explanation_shows_paragraph() {
    let mut state = PresentationState::new("X");
    assert!(state.toggle_explanation());
    assert_eq!(state.displayed_text(), EXPLANATION);
    assert_eq!(state.toggle_label(), BACK_LABEL);
}

#[test]
fn toggle_explanation_twice_restores_exact_quote() {
    let mut state = PresentationState::new("Original thought");
    let before = state.displayed_text();
    state.toggle_explanation();
    assert!(!state.toggle_explanation());
    assert_eq!(state.displayed_text(), before);
    assert_eq!(state.quote(), "Original thought");
}

#[test]
fn show_quote_resets_to_quote_view() {
    let mut state = PresentationState::new("old");
    state.toggle_explanation();
    state.set_copied(true);

    state.show_quote("new");

    assert!(!state.showing_explanation());
    assert!(!state.copied());
    assert_eq!(state.displayed_text(), "\"new\"");
}

#[test]
fn copy_label_tracks_copied_flag() {
    let mut state = PresentationState::new("X");
    assert_eq!(state.copy_label(), COPY_LABEL);
    state.set_copied(true);
    assert_eq!(state.copy_label(), COPIED_LABEL);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_follows_flag() {
    assert_eq!(Theme::from_dark_mode(true), Theme::Dark);
    assert_eq!(Theme::from_dark_mode(false), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_icon_and_attribute() {
    assert_eq!(Theme::Light.icon(), "fa-moon");
    assert_eq!(Theme::Dark.icon(), "fa-sun");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

// =============================================================
// Dark mode persistence
// =============================================================

#[test]
fn read_dark_mode_absent_is_none() {
    assert_eq!(read_dark_mode(&MemoryStore::new()), None);
}

#[test]
fn read_dark_mode_parses_flag() {
    let mut store = MemoryStore::new();
    store.set(DARK_MODE_KEY, "true").unwrap();
    assert_eq!(read_dark_mode(&store), Some(true));
    store.set(DARK_MODE_KEY, "false").unwrap();
    assert_eq!(read_dark_mode(&store), Some(false));
}

#[test]
fn read_dark_mode_ignores_garbage() {
    let mut store = MemoryStore::new();
    store.set(DARK_MODE_KEY, "yes please").unwrap();
    assert_eq!(read_dark_mode(&store), None);
}

#[test]
fn toggle_dark_mode_persists_new_value() {
    let mut store = MemoryStore::new();
    assert!(toggle_dark_mode(&mut store, false));
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("true"));
}

#[test]
fn toggle_dark_mode_twice_restores_state_and_flag() {
    let mut store = MemoryStore::new();
    store.set(DARK_MODE_KEY, "false").unwrap();

    let once = toggle_dark_mode(&mut store, false);
    let twice = toggle_dark_mode(&mut store, once);

    assert!(!twice);
    assert_eq!(store.get(DARK_MODE_KEY).as_deref(), Some("false"));
}
