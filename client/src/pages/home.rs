//! Single-page home screen: the auth section for signed-out users, the
//! mindmap section once a session token is held.

use leptos::prelude::*;

use crate::components::auth_panel::AuthPanel;
use crate::components::mindmap_panel::MindmapPanel;
use crate::state::session::{Section, SessionState};

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let section = Memo::new(move |_| session.get().active_section());

    view! {
        <main class="home-page">
            <Show when=move || section.get() == Section::Mindmap fallback=|| view! { <AuthPanel/> }>
                <MindmapPanel/>
            </Show>
        </main>
    }
}
