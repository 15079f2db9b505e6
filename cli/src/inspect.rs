//! Read-only commands: `dark-mode` and `status`.
//!
//! Neither starts a widget session, so running them on a new day leaves the
//! deck and today's quote for the next `today`, `new`, or `why`.

#[cfg(test)]
#[path = "inspect_test.rs"]
mod inspect_test;

use qotd::presentation::{self, Theme};
use qotd::store::{DATE_KEY, DECK_KEY};
use qotd::{CalendarDay, KvStore, QuoteStore, daily};

/// Current theme, flipped and persisted first when `toggle` is set.
/// An unset flag reads as light.
pub fn dark_mode<S: KvStore + ?Sized>(store: &mut S, toggle: bool) -> Theme {
    let mut dark = presentation::read_dark_mode(store).unwrap_or(false);
    if toggle {
        dark = presentation::toggle_dark_mode(store, dark);
    }
    Theme::from_dark_mode(dark)
}

/// `label : value` lines describing the persisted state.
pub fn status_lines<S: KvStore + ?Sized>(store: &S, quotes: &QuoteStore, today: CalendarDay) -> Vec<String> {
    let remaining = store
        .get(DECK_KEY)
        .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
        .map_or_else(|| "-".to_owned(), |deck| deck.len().to_string());
    let theme = Theme::from_dark_mode(presentation::read_dark_mode(store).unwrap_or(false));
    let quote = daily::stored_quote(store, today).unwrap_or_else(|| "(not drawn yet)".to_owned());
    let fallback = if quotes.is_fallback() { " (fallback)" } else { "" };

    vec![
        format!("today      : {today}"),
        format!("recorded   : {}", store.get(DATE_KEY).unwrap_or_else(|| "-".to_owned())),
        format!("quotes     : {}{fallback}", quotes.len()),
        format!("deck       : {remaining} of {} remaining", quotes.len()),
        format!("theme      : {}", theme.as_str()),
        format!("quote      : {quote}"),
    ]
}
