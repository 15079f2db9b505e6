//! Networking for the static quote document.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single startup fetch of `quotes.json`. There is no other
//! network traffic: everything after startup is local.

pub mod api;
