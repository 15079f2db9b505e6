//! What the widget is showing.
//!
//! [`PresentationState`] is transient: the active quote, whether the
//! explanation paragraph replaces it, and the short-lived "copied" marker.
//! The dark-mode flag is the only presentation value that is persisted.

#[cfg(test)]
#[path = "presentation_test.rs"]
mod presentation_test;

use crate::store::{DARK_MODE_KEY, KvStore, persist};

/// Paragraph shown by the "why" toggle.
pub const EXPLANATION: &str = "The so-called 'useless thoughts' are not truly useless. They are fragments of wisdom we already know, but bury under the noise of everyday life. They are simple truths—obvious, forgotten, or ignored—that remind us of our humanity. Their very uselessness is their power: they don't demand action, only reflection.";

/// Toggle label while the quote is showing.
pub const WHY_LABEL: &str = "Why useless thoughts?";
/// Toggle label while the explanation is showing.
pub const BACK_LABEL: &str = "Back to thoughts";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const COPY_FAILED_NOTICE: &str = "Failed to copy text. Please try again.";
/// Title passed to the native share sheet.
pub const SHARE_TITLE: &str = "Useless Thought for the Day";

/// Display form of a quote: wrapped in straight double quotes.
#[must_use]
pub fn format_quote(quote: &str) -> String {
    format!("\"{quote}\"")
}

/// Quote-or-explanation view state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresentationState {
    quote: String,
    showing_explanation: bool,
    copied: bool,
}

impl PresentationState {
    #[must_use]
    pub fn new(quote: impl Into<String>) -> Self {
        Self { quote: quote.into(), ..Self::default() }
    }

    /// Replace the active quote and return to the quote view.
    pub fn show_quote(&mut self, quote: impl Into<String>) {
        self.quote = quote.into();
        self.showing_explanation = false;
        self.copied = false;
    }

    /// Flip between quote and explanation; returns `true` if the explanation
    /// is now showing. The active quote is untouched either way.
    pub fn toggle_explanation(&mut self) -> bool {
        self.showing_explanation = !self.showing_explanation;
        self.showing_explanation
    }

    #[must_use]
    pub fn showing_explanation(&self) -> bool {
        self.showing_explanation
    }

    /// The active quote without display quoting.
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Exactly the text on screen, which is also what copy and share use.
    #[must_use]
    pub fn displayed_text(&self) -> String {
        if self.showing_explanation {
            EXPLANATION.to_owned()
        } else {
            format_quote(&self.quote)
        }
    }

    #[must_use]
    pub fn toggle_label(&self) -> &'static str {
        if self.showing_explanation { BACK_LABEL } else { WHY_LABEL }
    }

    pub fn set_copied(&mut self, copied: bool) {
        self.copied = copied;
    }

    #[must_use]
    pub fn copied(&self) -> bool {
        self.copied
    }

    #[must_use]
    pub fn copy_label(&self) -> &'static str {
        if self.copied { COPIED_LABEL } else { COPY_LABEL }
    }
}

/// Light/dark theme derived from the dark-mode flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value for the document `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Icon for the toggle: a moon offers dark mode, a sun offers light mode.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "fa-moon",
            Self::Dark => "fa-sun",
        }
    }
}

/// Read the persisted dark-mode flag. Anything but `"true"`/`"false"` reads
/// as no preference.
pub fn read_dark_mode<S: KvStore + ?Sized>(store: &S) -> Option<bool> {
    match store.get(DARK_MODE_KEY)?.as_str() {
        "true" => Some(true),
        "false" => Some(false),
        other => {
            log::debug!("ignoring dark mode value {other:?}");
            None
        }
    }
}

/// Flip `current`, persist the result, and return it.
pub fn toggle_dark_mode<S: KvStore + ?Sized>(store: &mut S, current: bool) -> bool {
    let next = !current;
    persist(store, DARK_MODE_KEY, if next { "true" } else { "false" });
    next
}
