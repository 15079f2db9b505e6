//! Core logic for the "useless thought of the day" widget.
//!
//! This crate has no rendering or browser dependency. Hosts (the Leptos
//! client and the terminal CLI) supply durable storage through [`KvStore`],
//! fetch the quote document themselves, and hand the raw result to
//! [`QuoteStore::load`]. Everything that decides *which* quote is shown lives
//! here and is unit-testable with [`MemoryStore`] and a seeded RNG.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Two-method key-value seam and the in-memory implementation |
//! | [`quotes`] | Quote document parsing and the load-failure fallback |
//! | [`day`] | Calendar day value and its persisted string form |
//! | [`deck`] | Shuffled, persisted deck handing out each quote once per cycle |
//! | [`daily`] | Date-keyed selection of today's quote |
//! | [`presentation`] | Quote/explanation view state and the dark-mode flag |
//! | [`capability`] | Clipboard and native-share seams plus the copy/share policy |
//! | [`widget`] | Session object wiring the above together for a host |

pub mod capability;
pub mod daily;
pub mod day;
pub mod deck;
pub mod presentation;
pub mod quotes;
pub mod store;
pub mod widget;

pub use day::CalendarDay;
pub use deck::DeckManager;
pub use quotes::QuoteStore;
pub use store::{KvStore, MemoryStore, StoreError};
pub use widget::QuoteWidget;
