//! Shuffled deck of quotes.
//!
//! The deck is the part of the current cycle not yet shown. Drawing pops from
//! the end; an empty deck is refilled with a fresh shuffle of every quote, so
//! each quote appears exactly once per cycle. Nothing prevents the last quote
//! of one cycle from also opening the next.
//!
//! The deck is persisted under [`DECK_KEY`] after every mutation, always after
//! the in-memory change is final.

#[cfg(test)]
#[path = "deck_test.rs"]
mod deck_test;

use std::collections::HashMap;

use rand::Rng;

use crate::quotes::{FALLBACK_QUOTE, QuoteStore};
use crate::store::{DECK_KEY, KvStore, persist};

/// Fisher–Yates shuffle: for `i` from `n - 1` down to 1, swap `i` with a
/// uniformly chosen `j` in `0..=i`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Owner of the in-memory deck and its durable copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckManager {
    quotes: Vec<String>,
    deck: Vec<String>,
}

impl DeckManager {
    /// Adopt the persisted deck if it is present, non-empty, and still drawn
    /// from `quotes`; otherwise shuffle every quote and persist the result.
    pub fn initialize<S, R>(quotes: &QuoteStore, store: &mut S, rng: &mut R) -> Self
    where
        S: KvStore + ?Sized,
        R: Rng + ?Sized,
    {
        let mut manager = Self { quotes: quotes.all().to_vec(), deck: Vec::new() };
        match read_deck(store, quotes) {
            Some(deck) => {
                log::debug!("restored deck with {} quotes remaining", deck.len());
                manager.deck = deck;
            }
            None => manager.refill(store, rng),
        }
        manager
    }

    /// Remove and return the last quote, reshuffling first if the deck is empty.
    pub fn draw<S, R>(&mut self, store: &mut S, rng: &mut R) -> String
    where
        S: KvStore + ?Sized,
        R: Rng + ?Sized,
    {
        if self.deck.is_empty() {
            self.refill(store, rng);
        }
        let quote = self.deck.pop().unwrap_or_else(|| FALLBACK_QUOTE.to_owned());
        self.save(store);
        quote
    }

    /// Quotes left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.deck.len()
    }

    /// Remaining quotes in draw order reversed (the next draw is the last element).
    #[must_use]
    pub fn deck(&self) -> &[String] {
        &self.deck
    }

    /// Size of a full cycle.
    #[must_use]
    pub fn cycle_len(&self) -> usize {
        self.quotes.len()
    }

    fn refill<S, R>(&mut self, store: &mut S, rng: &mut R)
    where
        S: KvStore + ?Sized,
        R: Rng + ?Sized,
    {
        let mut deck = self.quotes.clone();
        shuffle(&mut deck, rng);
        self.deck = deck;
        log::debug!("shuffled a new deck of {} quotes", self.deck.len());
        self.save(store);
    }

    fn save<S: KvStore + ?Sized>(&self, store: &mut S) {
        match serde_json::to_string(&self.deck) {
            Ok(raw) => persist(store, DECK_KEY, &raw),
            Err(e) => log::warn!("failed to encode deck: {e}"),
        }
    }
}

/// Read the persisted deck. Absent, malformed, empty, or stale decks (entries
/// or duplicates the quote list cannot account for) read as `None`.
fn read_deck<S: KvStore + ?Sized>(store: &S, quotes: &QuoteStore) -> Option<Vec<String>> {
    let raw = store.get(DECK_KEY)?;
    let deck: Vec<String> = match serde_json::from_str(&raw) {
        Ok(deck) => deck,
        Err(e) => {
            log::warn!("ignoring malformed persisted deck: {e}");
            return None;
        }
    };
    if deck.is_empty() {
        return None;
    }
    if !is_drawn_from(&deck, quotes.all()) {
        log::warn!("ignoring persisted deck that no longer matches the quote list");
        return None;
    }
    Some(deck)
}

/// Whether `deck` is a sub-multiset of `quotes`.
fn is_drawn_from(deck: &[String], quotes: &[String]) -> bool {
    let mut available: HashMap<&str, usize> = HashMap::new();
    for quote in quotes {
        *available.entry(quote.as_str()).or_default() += 1;
    }
    deck.iter().all(|quote| match available.get_mut(quote.as_str()) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    })
}
