//! Card displaying the active quote or the explanation paragraph.

use leptos::prelude::*;

use crate::state::widget::WidgetState;

/// Pause between clearing the card and showing new text.
#[cfg(feature = "hydrate")]
const RENDER_DELAY: std::time::Duration = std::time::Duration::from_millis(200);

/// Quote card. Whenever the displayed text changes the card is cleared and
/// refilled after a short delay, which gives the fade-in its blank frame.
#[component]
pub fn QuoteCard() -> impl IntoView {
    let state = expect_context::<RwSignal<WidgetState>>();
    let rendered = RwSignal::new(String::new());
    let generation = RwSignal::new(0_u64);

    Effect::new(move || {
        let text = state.with(WidgetState::display_text);
        render(rendered, generation, text);
    });

    let card_class = move || {
        if state.with(WidgetState::showing_explanation) {
            "quote-card quote-card--explanation"
        } else {
            "quote-card"
        }
    };

    view! {
        <blockquote class=card_class id="quote">
            {move || rendered.get()}
        </blockquote>
    }
}

/// Replace the card text. Only the latest call lands: a slower timer from an
/// earlier call sees a newer generation and drops its text.
fn render(target: RwSignal<String>, generation: RwSignal<u64>, text: String) {
    #[cfg(feature = "hydrate")]
    {
        let ticket = generation.get_untracked().wrapping_add(1);
        generation.set(ticket);
        target.set(String::new());
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(RENDER_DELAY).await;
            if generation.get_untracked() == ticket {
                target.set(text);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
        target.set(text);
    }
}
