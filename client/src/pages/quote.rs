//! The widget page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs the startup sequence once in the browser: fetch `quotes.json`, build
//! the core widget against `localStorage` (deck, today's quote, dark mode),
//! and apply the theme. The card and action bar read everything else from
//! the shared `WidgetState` context.

use leptos::prelude::*;
use qotd::presentation::SHARE_TITLE;
use qotd::quotes::LOAD_ERROR_NOTICE;

use crate::components::action_bar::ActionBar;
use crate::components::quote_card::QuoteCard;
use crate::state::widget::WidgetState;

#[component]
pub fn QuotePage() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let quotes = qotd::QuoteStore::load(crate::net::api::fetch_quotes().await);
            let today = crate::util::today::today();
            let seed = crate::util::today::random_seed();
            let system_dark = crate::util::dark_mode::system_prefers_dark();
            state.update(|s| s.start(quotes, today, seed, system_dark));
            crate::util::dark_mode::apply(state.with_untracked(WidgetState::theme));
        });
    }

    let on_dismiss = move |_| state.update(WidgetState::dismiss_notice);

    view! {
        <main class="quote-page">
            <h1 class="quote-page__title">{SHARE_TITLE}</h1>
            <QuoteCard/>
            <Show when=move || state.with(|s| s.load_failed)>
                <p class="quote-page__status">{LOAD_ERROR_NOTICE}</p>
            </Show>
            <ActionBar/>
            <Show when=move || state.with(|s| s.notice.is_some())>
                <div class="quote-page__notice" role="alert">
                    <span>{move || state.with(|s| s.notice.clone().unwrap_or_default())}</span>
                    <button class="btn btn--small" on:click=on_dismiss>"OK"</button>
                </div>
            </Show>
        </main>
    }
}
