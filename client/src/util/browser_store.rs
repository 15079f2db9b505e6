//! `localStorage`-backed [`KvStore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The core persists the deck, today's quote, its date, and the dark-mode
//! flag through this store. The handle is looked up on every call, so the
//! type carries no browser object and can live inside a `RwSignal`.

#[cfg(test)]
#[path = "browser_store_test.rs"]
mod browser_store_test;

use qotd::{KvStore, StoreError};

/// Origin-scoped browser storage. Without `hydrate` reads are empty and
/// writes succeed without storing anything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStore;

impl KvStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage()?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| StoreError::Write {
                key: key.to_owned(),
                message: e.as_string().unwrap_or_else(|| format!("{e:?}")),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
