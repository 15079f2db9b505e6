//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, share,
//! theme, clock) from page and component logic. Each one compiles to a
//! harmless no-op without the `hydrate` feature so SSR and tests stay
//! deterministic.

pub mod browser_store;
pub mod clipboard;
pub mod dark_mode;
pub mod today;
