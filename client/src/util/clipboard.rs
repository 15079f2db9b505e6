//! Browser clipboard and Web Share wrappers.
//!
//! Both capabilities are looked up on `navigator` at call time: an origin
//! without a secure context has neither, and Web Share is missing on most
//! desktop browsers. Absence is reported as `Unavailable` so the core policy
//! can fall back.

#![allow(clippy::unused_async)]

use qotd::capability::{Clipboard, ClipboardError, Share, ShareError, SharePayload};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue};

/// `navigator.clipboard.writeText`.
pub struct BrowserClipboard;

/// `navigator.share`.
pub struct BrowserShare;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        #[cfg(feature = "hydrate")]
        {
            let navigator = web_sys::window().ok_or(ClipboardError::Unavailable)?.navigator();
            let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
                .map_err(|_| ClipboardError::Unavailable)?;
            if clipboard.is_undefined() || clipboard.is_null() {
                return Err(ClipboardError::Unavailable);
            }
            let clipboard: web_sys::Clipboard = clipboard.unchecked_into();
            wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Write(describe(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
            Err(ClipboardError::Unavailable)
        }
    }
}

impl Share for BrowserShare {
    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        #[cfg(feature = "hydrate")]
        {
            let navigator = web_sys::window().ok_or(ShareError::Unavailable)?.navigator();
            let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
                .map_err(|_| ShareError::Unavailable)?;
            let Some(share) = share.dyn_ref::<js_sys::Function>() else {
                return Err(ShareError::Unavailable);
            };

            let data = js_sys::Object::new();
            set_field(&data, "title", &payload.title)?;
            set_field(&data, "text", &payload.text)?;
            if let Some(url) = &payload.url {
                set_field(&data, "url", url)?;
            }

            // A synchronous throw means the sheet never opened; a rejected
            // promise means the user saw it and backed out.
            let promise = share
                .call1(&navigator, &data)
                .map_err(|e| ShareError::Failed(describe(&e)))?
                .dyn_into::<js_sys::Promise>()
                .map_err(|e| ShareError::Failed(describe(&e)))?;
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| ShareError::Rejected(describe(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ShareError::Unavailable)
        }
    }
}

/// Current page URL, shared alongside the text.
pub fn page_url() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.location().href().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn set_field(target: &js_sys::Object, key: &str, value: &str) -> Result<(), ShareError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), &JsValue::from_str(value))
        .map(|_| ())
        .map_err(|e| ShareError::Failed(describe(&e)))
}

#[cfg(feature = "hydrate")]
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
