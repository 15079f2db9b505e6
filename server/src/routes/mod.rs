//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget is a single page. Leptos renders the shell at `/`, the WASM
//! bundle is served from `/pkg`, and the quote document the page fetches on
//! startup is served as a plain static file at `/quotes.json`.
//!
//! ERROR HANDLING
//! ==============
//! A missing or malformed quote document never stops the server. The page
//! degrades to its fallback quote on its own; `check_quotes` only logs.


use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use qotd::QuoteStore;
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Routes that do not depend on the Leptos site configuration.
pub fn static_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route_service("/quotes.json", ServeFile::new(&config.quotes_path))
        .route("/healthz", get(healthz))
}

/// Full router: static routes, Leptos SSR shell, and the `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` and no `LEPTOS_*` environment).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(static_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Parse the quote document once at startup and report what the page will see.
/// Returns the number of quotes, or `None` when the page will fall back.
pub async fn check_quotes(path: &Path) -> Option<usize> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "quote document unreadable; page will use its fallback");
            return None;
        }
    };
    match QuoteStore::from_json(&raw) {
        Ok(store) => {
            tracing::info!(path = %path.display(), count = store.len(), "quote document loaded");
            Some(store.len())
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "quote document invalid; page will use its fallback");
            None
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
