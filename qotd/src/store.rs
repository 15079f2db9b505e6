//! Durable key-value storage seam.
//!
//! DESIGN
//! ======
//! Everything the widget persists goes through [`KvStore`], a two-method
//! interface shaped like browser `localStorage`. Hosts provide the durable
//! implementation; [`MemoryStore`] backs tests and storage-less sessions.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: an unreadable or missing entry is `None`, which every
//! caller treats as "empty" and regenerates. Writes report [`StoreError`];
//! [`persist`] logs those and carries on because no storage failure is fatal.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

/// JSON-encoded remaining deck.
pub const DECK_KEY: &str = "deck";
/// Quote selected for the day recorded under [`DATE_KEY`].
pub const TODAY_QUOTE_KEY: &str = "todayQuote";
/// Calendar day (`YYYY-MM-DD`) the stored quote belongs to.
pub const DATE_KEY: &str = "date";
/// `"true"` / `"false"` dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Error returned by [`KvStore::set`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The host has no durable storage (disabled, private mode, no window).
    #[error("storage unavailable")]
    Unavailable,
    /// The host refused or failed the write.
    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },
}

/// Origin-scoped durable string storage.
pub trait KvStore {
    /// Read the value stored under `key`, or `None` if absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the host cannot write the entry.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// `HashMap`-backed [`KvStore`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Write `value` under `key`, logging a failed write instead of returning it.
pub fn persist<S: KvStore + ?Sized>(store: &mut S, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        log::warn!("failed to persist {key}: {e}");
    }
}
