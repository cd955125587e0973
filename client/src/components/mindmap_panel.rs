//! Mindmap section: topic input, create/clear/logout controls and the
//! container holding either the placeholder or the rendered node.

#[cfg(test)]
#[path = "mindmap_panel_test.rs"]
mod mindmap_panel_test;

use leptos::prelude::*;

use super::mindmap_node::MindmapNodeCard;
use crate::state::mindmap::{MindmapContent, MindmapState, PLACEHOLDER_TEXT};
use crate::state::session::SessionState;
use crate::util::dialog::alert;
use crate::util::token_store::LocalStorage;

/// Sign out locally, reset the mindmap, and notify the server when a token
/// was held. Safe to call repeatedly.
pub fn logout(session: RwSignal<SessionState>, mindmap: RwSignal<MindmapState>) {
    let token = session.try_update(|s| s.sign_out(&LocalStorage)).flatten();
    mindmap.update(MindmapState::clear);

    if let Some(token) = token {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout(&token).await;
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    }
}

#[component]
pub fn MindmapPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let mindmap = expect_context::<RwSignal<MindmapState>>();

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = mindmap.try_update(|m| m.create().err()).flatten() {
            alert(message);
        }
    };

    view! {
        <section id="mindmapSection" class="mindmap-section">
            <header class="mindmap-header">
                <h1>"LLaMA MindMap"</h1>
                <button class="btn btn--secondary" type="button" on:click=move |_| logout(session, mindmap)>
                    "Logout"
                </button>
            </header>
            <form class="topic-form" on:submit=on_create>
                <input
                    id="topicInput"
                    class="topic-input"
                    type="text"
                    placeholder="Enter a topic"
                    prop:value=move || mindmap.get().topic_input
                    on:input=move |ev| mindmap.update(|m| m.topic_input = event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Create Mindmap"</button>
                <button class="btn btn--secondary" type="button" on:click=move |_| mindmap.update(MindmapState::clear)>
                    "Clear"
                </button>
            </form>
            <div id="mindmapContainer" class="mindmap-container">
                {move || match mindmap.get().content {
                    MindmapContent::Placeholder => {
                        view! { <p class="mindmap-placeholder">{PLACEHOLDER_TEXT}</p> }.into_any()
                    }
                    MindmapContent::Node(node) => view! { <MindmapNodeCard node=node/> }.into_any(),
                }}
            </div>
        </section>
    }
}
