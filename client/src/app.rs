//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use qotd::presentation::SHARE_TITLE;

use crate::pages::quote::QuotePage;
use crate::state::widget::WidgetState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the widget state context and mounts the single quote route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let widget = RwSignal::new(WidgetState::default());
    provide_context(widget);

    view! {
        <Title text=SHARE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=QuotePage/>
            </Routes>
        </Router>
    }
}
