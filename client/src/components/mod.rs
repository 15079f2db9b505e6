//! Reusable UI components for the quote widget.

pub mod action_bar;
pub mod quote_card;
