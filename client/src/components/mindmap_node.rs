//! Card for a single mindmap node with its stubbed action buttons.

use leptos::prelude::*;

use crate::state::mindmap::MindmapNode;
use crate::util::dialog::alert;

#[component]
pub fn MindmapNodeCard(node: MindmapNode) -> impl IntoView {
    let buttons = node
        .actions()
        .iter()
        .map(|&action| {
            view! {
                <button class="btn" type="button" on:click=move |_| alert(action.outcome_message())>
                    {action.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="mindmap-node">
            <h3 class="mindmap-node__topic">{node.topic}</h3>
            <div class="mindmap-node__actions">{buttons}</div>
        </div>
    }
}
