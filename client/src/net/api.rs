//! Quote document fetch.
//!
//! Client-side (hydrate): one GET of `quotes.json` via `gloo-net`, relative to
//! the page. Server-side (SSR): a stub error, since the document is only
//! fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` and are handed straight to
//! `QuoteStore::load`, which logs them and substitutes the fallback quote.
//! There is exactly one attempt per session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Path of the quote document, relative to the page.
pub const QUOTES_PATH: &str = "quotes.json";

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

/// Fetch the raw quote document.
///
/// # Errors
///
/// Returns an error string on transport failure, a non-success status, or an
/// unreadable body.
pub async fn fetch_quotes() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(QUOTES_PATH)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(fetch_failed_message(resp.status()));
        }
        resp.text().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
