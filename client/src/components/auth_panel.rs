//! Auth section: tab switcher over the login and register forms.

use leptos::prelude::*;

use super::login_form::LoginForm;
use super::register_form::RegisterForm;
use crate::state::ui::{AuthTab, UiState};

#[component]
pub fn AuthPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tabs = AuthTab::ALL
        .into_iter()
        .map(|tab| {
            view! {
                <button
                    class="auth-tab"
                    class:active=move || ui.get().is_active(tab)
                    type="button"
                    on:click=move |_| {
                        ui.update(|u| {
                            u.switch_tab(tab.id());
                        });
                    }
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="authSection" class="auth-section">
            <div class="auth-card">
                <h1 class="auth-card__title">"LLaMA MindMap"</h1>
                <div class="auth-tabs">{tabs}</div>
                <LoginForm active=Signal::derive(move || ui.get().is_active(AuthTab::Login))/>
                <RegisterForm active=Signal::derive(move || ui.get().is_active(AuthTab::Register))/>
            </div>
        </section>
    }
}
