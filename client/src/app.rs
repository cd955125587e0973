//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{mindmap::MindmapState, session::SessionState, ui::UiState};
use crate::util::token_store::LocalStorage;

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
/// Provides the session, UI, and mindmap state contexts. The session starts
/// signed out on both server and client so hydration matches, then picks up
/// any persisted token once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let mindmap = RwSignal::new(MindmapState::default());

    provide_context(session);
    provide_context(ui);
    provide_context(mindmap);

    Effect::new(move |_| {
        let restored = SessionState::restore(&LocalStorage);
        if restored.is_authenticated() {
            session.set(restored);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/llama-mindmap.css"/>
        <Title text="LLaMA MindMap"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
