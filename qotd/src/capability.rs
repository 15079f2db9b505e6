//! Clipboard and native-share seams.
//!
//! Hosts implement [`Clipboard`] and [`Share`] over whatever the platform
//! offers. The policy lives here: a failed copy surfaces a notice and changes
//! nothing else, and a share that is unavailable or fails to start falls back
//! to copying the same text.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

use crate::presentation::COPY_FAILED_NOTICE;

/// Error from a clipboard write.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Error from a native share request.
#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    /// The platform has no share capability.
    #[error("native share unavailable")]
    Unavailable,
    /// The share call itself threw before the sheet opened.
    #[error("share failed: {0}")]
    Failed(String),
    /// The sheet opened and was dismissed or rejected.
    #[error("share rejected: {0}")]
    Rejected(String),
}

/// Title, text, and optional page URL handed to the share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

/// Write-only system clipboard.
pub trait Clipboard {
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the text could not be written.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Native share sheet.
pub trait Share {
    /// # Errors
    ///
    /// Returns [`ShareError`] describing why the share did not complete.
    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Result of a copy action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

impl CopyOutcome {
    /// Message to surface to the user, if any.
    #[must_use]
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Copied => None,
            Self::Failed => Some(COPY_FAILED_NOTICE),
        }
    }
}

/// Result of a share action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    /// The user dismissed the sheet; nothing else happens.
    Dismissed,
    /// Sharing was not possible and the text was copied instead.
    FellBackToCopy(CopyOutcome),
}

/// Copy `text`, reporting the outcome instead of an error.
pub async fn copy_text<C: Clipboard>(clipboard: &C, text: &str) -> CopyOutcome {
    match clipboard.write_text(text).await {
        Ok(()) => CopyOutcome::Copied,
        Err(e) => {
            log::error!("Failed to copy: {e}");
            CopyOutcome::Failed
        }
    }
}

/// Share `payload`, falling back to copying its text when the share sheet is
/// unavailable or fails to open.
pub async fn share_text<S: Share, C: Clipboard>(share: &S, clipboard: &C, payload: &SharePayload) -> ShareOutcome {
    match share.share(payload).await {
        Ok(()) => {
            log::info!("Shared successfully");
            ShareOutcome::Shared
        }
        Err(ShareError::Rejected(reason)) => {
            log::info!("Error sharing: {reason}");
            ShareOutcome::Dismissed
        }
        Err(e) => {
            log::info!("Error sharing: {e}; copying instead");
            ShareOutcome::FellBackToCopy(copy_text(clipboard, &payload.text).await)
        }
    }
}
