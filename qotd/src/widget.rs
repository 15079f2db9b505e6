//! Session object for one widget instance.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts build a [`QuoteWidget`] once the quote document has been fetched and
//! then route each of the five user actions to it. It owns the storage handle
//! and RNG so handlers need no global state.
//!
//! A session started on the fallback quote list is degraded: its deck and
//! daily pick live in a session-only [`MemoryStore`], so the durable deck and
//! today's recorded quote survive for the next successful load. Only the
//! dark-mode flag reaches durable storage.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use rand::Rng;

use crate::capability::{CopyOutcome, SharePayload};
use crate::daily;
use crate::day::CalendarDay;
use crate::deck::DeckManager;
use crate::presentation::{self, PresentationState, SHARE_TITLE, Theme};
use crate::quotes::QuoteStore;
use crate::store::{KvStore, MemoryStore};

pub struct QuoteWidget<S, R> {
    quotes: QuoteStore,
    deck: DeckManager,
    store: S,
    /// Deck and daily state for a fallback session; `None` when they are durable.
    session: Option<MemoryStore>,
    rng: R,
    presentation: PresentationState,
    dark_mode: bool,
}

impl<S: KvStore, R: Rng> QuoteWidget<S, R> {
    /// Run the startup sequence: initialize the deck, resolve today's quote,
    /// and read the dark-mode flag (`dark_mode_default` when none is stored).
    pub fn start(quotes: QuoteStore, mut store: S, mut rng: R, today: CalendarDay, dark_mode_default: bool) -> Self {
        let mut session = quotes.is_fallback().then(MemoryStore::new);
        let (deck, quote) = match session.as_mut() {
            Some(scratch) => {
                log::warn!("quotes unavailable; keeping persisted deck and today's quote untouched");
                let mut deck = DeckManager::initialize(&quotes, &mut *scratch, &mut rng);
                let quote = daily::resolve(&mut deck, &mut *scratch, &mut rng, today);
                (deck, quote)
            }
            None => {
                let mut deck = DeckManager::initialize(&quotes, &mut store, &mut rng);
                let quote = daily::resolve(&mut deck, &mut store, &mut rng, today);
                (deck, quote)
            }
        };
        let dark_mode = presentation::read_dark_mode(&store).unwrap_or(dark_mode_default);
        Self {
            quotes,
            deck,
            store,
            session,
            rng,
            presentation: PresentationState::new(quote),
            dark_mode,
        }
    }

    /// "New quote": draw immediately and make it today's quote, overriding
    /// the daily pick (see [`daily::override_today`]).
    pub fn new_quote(&mut self, today: CalendarDay) -> &str {
        let quote = match self.session.as_mut() {
            Some(scratch) => daily::override_today(&mut self.deck, scratch, &mut self.rng, today),
            None => daily::override_today(&mut self.deck, &mut self.store, &mut self.rng, today),
        };
        self.presentation.show_quote(quote);
        self.presentation.quote()
    }

    /// Returns `true` if the explanation is now showing.
    pub fn toggle_explanation(&mut self) -> bool {
        self.presentation.toggle_explanation()
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = presentation::toggle_dark_mode(&mut self.store, self.dark_mode);
        self.dark_mode
    }

    /// Record a finished copy. Only a success marks the copy control; the
    /// displayed text never changes.
    pub fn record_copy(&mut self, outcome: CopyOutcome) {
        self.presentation.set_copied(outcome == CopyOutcome::Copied);
    }

    pub fn clear_copied(&mut self) {
        self.presentation.set_copied(false);
    }
}

impl<S, R> QuoteWidget<S, R> {
    #[must_use]
    pub fn displayed_text(&self) -> String {
        self.presentation.displayed_text()
    }

    #[must_use]
    pub fn share_payload(&self, url: Option<String>) -> SharePayload {
        SharePayload { title: SHARE_TITLE.to_owned(), text: self.displayed_text(), url }
    }

    #[must_use]
    pub fn presentation(&self) -> &PresentationState {
        &self.presentation
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }

    #[must_use]
    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }

    #[must_use]
    pub fn deck(&self) -> &DeckManager {
        &self.deck
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
