//! Reactive widget state provided via context.
//!
//! DESIGN
//! ======
//! `WidgetState` wraps the core `QuoteWidget` with the bits only the page
//! needs: whether the quote document failed to load and the current
//! user-visible notice. The widget is `None` until the startup fetch
//! finishes, and every action is a no-op until then.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use qotd::capability::{CopyOutcome, SharePayload};
use qotd::presentation::{COPY_LABEL, Theme, WHY_LABEL};
use qotd::{CalendarDay, QuoteStore, QuoteWidget};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::util::browser_store::BrowserStore;

/// Placeholder shown until the quote document has been fetched.
pub const LOADING_TEXT: &str = "Loading…";

/// Core widget bound to browser storage.
pub type BrowserWidget = QuoteWidget<BrowserStore, StdRng>;

#[derive(Default)]
pub struct WidgetState {
    widget: Option<BrowserWidget>,
    /// The quote document could not be loaded and the fallback is showing.
    pub load_failed: bool,
    /// User-visible notice from the last action (e.g. a failed copy).
    pub notice: Option<String>,
}

impl WidgetState {
    /// Finish startup with the loaded quotes.
    ///
    /// `system_dark` is the initial theme when no preference is persisted.
    pub fn start(&mut self, quotes: QuoteStore, today: CalendarDay, seed: u64, system_dark: bool) {
        self.load_failed = quotes.is_fallback();
        self.notice = None;
        self.widget = Some(QuoteWidget::start(
            quotes,
            BrowserStore,
            StdRng::seed_from_u64(seed),
            today,
            system_dark,
        ));
    }

    pub fn is_ready(&self) -> bool {
        self.widget.is_some()
    }

    /// Text the quote card should show.
    pub fn display_text(&self) -> String {
        self.widget
            .as_ref()
            .map_or_else(|| LOADING_TEXT.to_owned(), QuoteWidget::displayed_text)
    }

    pub fn showing_explanation(&self) -> bool {
        self.widget
            .as_ref()
            .is_some_and(|w| w.presentation().showing_explanation())
    }

    pub fn toggle_label(&self) -> &'static str {
        self.widget
            .as_ref()
            .map_or(WHY_LABEL, |w| w.presentation().toggle_label())
    }

    pub fn copy_label(&self) -> &'static str {
        self.widget
            .as_ref()
            .map_or(COPY_LABEL, |w| w.presentation().copy_label())
    }

    pub fn theme(&self) -> Theme {
        self.widget.as_ref().map_or(Theme::Light, QuoteWidget::theme)
    }

    pub fn new_quote(&mut self, today: CalendarDay) {
        self.notice = None;
        if let Some(widget) = self.widget.as_mut() {
            widget.new_quote(today);
        }
    }

    pub fn toggle_explanation(&mut self) {
        self.notice = None;
        if let Some(widget) = self.widget.as_mut() {
            widget.toggle_explanation();
        }
    }

    /// Flip and persist dark mode, returning the theme to apply.
    pub fn toggle_dark_mode(&mut self) -> Theme {
        if let Some(widget) = self.widget.as_mut() {
            widget.toggle_dark_mode();
        }
        self.theme()
    }

    /// Text a copy action should write, if the widget is ready.
    pub fn copy_text(&self) -> Option<String> {
        self.widget.as_ref().map(QuoteWidget::displayed_text)
    }

    pub fn share_payload(&self, url: Option<String>) -> Option<SharePayload> {
        self.widget.as_ref().map(|w| w.share_payload(url))
    }

    /// Apply a finished copy: a failure raises the notice and changes nothing
    /// else; a success marks the copy control.
    pub fn record_copy(&mut self, outcome: CopyOutcome) {
        self.notice = outcome.notice().map(str::to_owned);
        if let Some(widget) = self.widget.as_mut() {
            widget.record_copy(outcome);
        }
    }

    pub fn clear_copied(&mut self) {
        if let Some(widget) = self.widget.as_mut() {
            widget.clear_copied();
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
