//! Registration form. A successful registration does not sign the user in; it
//! switches back to the login tab.

#[cfg(test)]
#[path = "register_form_test.rs"]
mod register_form_test;

use leptos::prelude::*;

use super::login_form::MISSING_FIELDS_MESSAGE;
use crate::net::types::RegisterRequest;
use crate::state::ui::{AuthTab, UiState};
use crate::util::dialog::alert;

pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";

/// Build the registration request. Username and email are trimmed;
/// the password is sent as typed.
///
/// # Errors
///
/// Returns `MISSING_FIELDS_MESSAGE` when any field is empty.
pub fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterForm(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&request).await {
                Ok(_) => {
                    alert(REGISTER_SUCCESS_MESSAGE);
                    ui.update(|u| {
                        u.switch_tab(AuthTab::Login.id());
                    });
                }
                Err(e) => alert(&e.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, ui);
            busy.set(false);
        }
    };

    view! {
        <form id={AuthTab::Register.form_id()} class="auth-form" class:active=move || active.get() on:submit=on_submit>
            <input
                class="auth-input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                class="auth-input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Register"
            </button>
        </form>
    }
}
