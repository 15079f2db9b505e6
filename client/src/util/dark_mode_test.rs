#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn system_preference_is_light_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
