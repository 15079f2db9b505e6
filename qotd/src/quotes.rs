//! Quote document loading.
//!
//! The quote list is a static JSON array of strings fetched once per session.
//! Fetching is the host's job; this module turns whatever the host got back
//! into a [`QuoteStore`] that is never empty, so downstream code always has
//! something to show.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use std::fmt::Display;

/// Single entry used when the quote document cannot be loaded.
pub const FALLBACK_QUOTE: &str = "The moon doesn’t apologize for being half-lit. Neither should you.";

/// User-facing notice shown while the fallback entry is in use.
pub const LOAD_ERROR_NOTICE: &str = "Error loading quotes. Please refresh the page.";

/// Why a quote document was rejected.
#[derive(Debug, thiserror::Error)]
pub enum QuoteLoadError {
    /// Transport failure or non-success status reported by the host.
    #[error("failed to fetch quotes: {0}")]
    Fetch(String),
    /// The document is not a JSON array of strings.
    #[error("malformed quotes document: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but holds no quotes.
    #[error("quotes document is empty")]
    Empty,
}

/// Ordered, immutable, non-empty list of quotes for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<String>,
    fallback: bool,
}

impl QuoteStore {
    /// Parse a JSON array of strings.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteLoadError::Parse`] for anything that is not a string
    /// array and [`QuoteLoadError::Empty`] for `[]`.
    pub fn from_json(raw: &str) -> Result<Self, QuoteLoadError> {
        let quotes: Vec<String> = serde_json::from_str(raw)?;
        Self::from_quotes(quotes)
    }

    /// Build a store from an already-decoded list.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteLoadError::Empty`] if `quotes` is empty.
    pub fn from_quotes(quotes: Vec<String>) -> Result<Self, QuoteLoadError> {
        if quotes.is_empty() {
            return Err(QuoteLoadError::Empty);
        }
        Ok(Self { quotes, fallback: false })
    }

    /// The single-entry store used after a failed load.
    #[must_use]
    pub fn fallback() -> Self {
        Self { quotes: vec![FALLBACK_QUOTE.to_owned()], fallback: true }
    }

    /// Turn the host's fetch result into a store. Never fails: transport,
    /// parse, and empty-document errors are logged and replaced by
    /// [`QuoteStore::fallback`].
    pub fn load<E: Display>(fetched: Result<String, E>) -> Self {
        let parsed = fetched
            .map_err(|e| QuoteLoadError::Fetch(e.to_string()))
            .and_then(|raw| Self::from_json(&raw));

        match parsed {
            Ok(store) => {
                log::info!("loaded {} quotes", store.len());
                store
            }
            Err(e) => {
                log::error!("Error loading quotes: {e}");
                Self::fallback()
            }
        }
    }

    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.quotes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always `false` for a constructed store; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, quote: &str) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }

    /// Whether this store is the load-failure fallback.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }
}
