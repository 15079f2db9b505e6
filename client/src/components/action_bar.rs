//! The five widget controls: new quote, why, copy, share, dark mode.

use leptos::prelude::*;

use crate::state::widget::WidgetState;
use crate::util::dark_mode;
use crate::util::today::today;

/// How long the copy control reads "Copied!".
#[cfg(feature = "hydrate")]
const COPIED_FEEDBACK: std::time::Duration = std::time::Duration::from_secs(2);

/// Button row bound to the widget actions. Disabled until startup finishes.
#[component]
pub fn ActionBar() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let not_ready = move || !state.with(WidgetState::is_ready);

    let on_new_quote = move |_| state.update(|s| s.new_quote(today()));
    let on_toggle_why = move |_| state.update(WidgetState::toggle_explanation);

    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(text) = state.with_untracked(WidgetState::copy_text) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let clipboard = crate::util::clipboard::BrowserClipboard;
                let outcome = qotd::capability::copy_text(&clipboard, &text).await;
                finish_copy(state, outcome);
            });
        }
    };

    let on_share = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use qotd::capability::ShareOutcome;

            let url = crate::util::clipboard::page_url();
            let Some(payload) = state.with_untracked(|s| s.share_payload(url)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let share = crate::util::clipboard::BrowserShare;
                let clipboard = crate::util::clipboard::BrowserClipboard;
                match qotd::capability::share_text(&share, &clipboard, &payload).await {
                    ShareOutcome::FellBackToCopy(outcome) => finish_copy(state, outcome),
                    ShareOutcome::Shared | ShareOutcome::Dismissed => {}
                }
            });
        }
    };

    let on_dark_mode = move |_| {
        let mut theme = None;
        state.update(|s| theme = Some(s.toggle_dark_mode()));
        if let Some(theme) = theme {
            dark_mode::apply(theme);
        }
    };

    let why_icon = move || {
        if state.with(WidgetState::showing_explanation) {
            "fas fa-arrow-left"
        } else {
            "fas fa-question-circle"
        }
    };
    let copy_icon = move || {
        if state.with(|s| s.copy_label() == qotd::presentation::COPIED_LABEL) {
            "fas fa-check"
        } else {
            "fas fa-copy"
        }
    };
    let theme_icon = move || format!("fas {}", state.with(|s| s.theme().icon()));

    view! {
        <div class="action-bar">
            <button id="new-quote" class="btn btn--primary" on:click=on_new_quote disabled=not_ready>
                <i class="fas fa-sync-alt"></i>
                " New thought"
            </button>
            <button id="why" class="btn" on:click=on_toggle_why disabled=not_ready>
                <i class=why_icon></i>
                " "
                {move || state.with(WidgetState::toggle_label)}
            </button>
            <button id="copy" class="btn" on:click=on_copy disabled=not_ready>
                <i class=copy_icon></i>
                " "
                {move || state.with(WidgetState::copy_label)}
            </button>
            <button id="share" class="btn" on:click=on_share disabled=not_ready>
                <i class="fas fa-share-alt"></i>
                " Share"
            </button>
            <button id="dark-mode" class="btn" on:click=on_dark_mode disabled=not_ready title="Toggle dark mode">
                <i class=theme_icon></i>
            </button>
        </div>
    }
}

/// Record a copy result and, on success, reset the control label later.
#[cfg(feature = "hydrate")]
fn finish_copy(state: RwSignal<WidgetState>, outcome: qotd::capability::CopyOutcome) {
    state.update(|s| s.record_copy(outcome));
    if outcome == qotd::capability::CopyOutcome::Copied {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(COPIED_FEEDBACK).await;
            state.update(WidgetState::clear_copied);
        });
    }
}
