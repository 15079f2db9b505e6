//! Top-level route pages.

pub mod quote;
