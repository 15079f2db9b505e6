#![cfg(not(feature = "hydrate"))]

use qotd::store::{DARK_MODE_KEY, DECK_KEY};

use super::*;

#[test]
fn get_is_empty_without_browser() {
    assert_eq!(BrowserStore.get(DECK_KEY), None);
}

#[test]
fn set_succeeds_without_storing() {
    let mut store = BrowserStore;
    assert!(store.set(DARK_MODE_KEY, "true").is_ok());
    assert_eq!(store.get(DARK_MODE_KEY), None);
}
