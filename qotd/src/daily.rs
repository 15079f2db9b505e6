//! Date-keyed selection of today's quote.
//!
//! Quote *selection* is random and deck-based; quote *persistence* is keyed by
//! calendar day. Reloading during a day shows the same quote, the first visit
//! on a new day draws the next one, and no server or scheduled job is needed.

#[cfg(test)]
#[path = "daily_test.rs"]
mod daily_test;

use rand::Rng;

use crate::day::CalendarDay;
use crate::deck::DeckManager;
use crate::store::{DATE_KEY, KvStore, TODAY_QUOTE_KEY, persist};

/// Today's persisted quote, if one is recorded for exactly `today`.
pub fn stored_quote<S: KvStore + ?Sized>(store: &S, today: CalendarDay) -> Option<String> {
    let recorded = store.get(DATE_KEY)?;
    if recorded != today.to_string() {
        return None;
    }
    store.get(TODAY_QUOTE_KEY)
}

/// Return the quote for `today`.
///
/// Idempotent within a day: a quote recorded for `today` is returned as-is no
/// matter how often this runs. A missing or stale record draws from the deck
/// and records the result against `today`.
pub fn resolve<S, R>(deck: &mut DeckManager, store: &mut S, rng: &mut R, today: CalendarDay) -> String
where
    S: KvStore + ?Sized,
    R: Rng + ?Sized,
{
    if let Some(quote) = stored_quote(store, today) {
        return quote;
    }
    log::info!("drawing quote for {today}");
    draw_for(deck, store, rng, today)
}

/// Draw a new quote and record it as today's, replacing any quote already
/// chosen for `today`.
///
/// This is the "new quote" button. It deliberately bypasses the one quote per
/// day rule: the override persists, so a reload later the same day shows the
/// overriding quote rather than the original one.
pub fn override_today<S, R>(deck: &mut DeckManager, store: &mut S, rng: &mut R, today: CalendarDay) -> String
where
    S: KvStore + ?Sized,
    R: Rng + ?Sized,
{
    log::info!("overriding quote for {today}");
    draw_for(deck, store, rng, today)
}

fn draw_for<S, R>(deck: &mut DeckManager, store: &mut S, rng: &mut R, today: CalendarDay) -> String
where
    S: KvStore + ?Sized,
    R: Rng + ?Sized,
{
    let quote = deck.draw(store, rng);
    // Quote before date: an interrupted write leaves a stale date, which
    // regenerates instead of pinning a quote that was never shown.
    persist(store, TODAY_QUOTE_KEY, &quote);
    persist(store, DATE_KEY, &today.to_string());
    quote
}
