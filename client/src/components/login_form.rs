//! Login form: validates input, exchanges credentials for a session token.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::state::session::SessionState;
use crate::state::ui::AuthTab;
use crate::util::dialog::alert;
use crate::util::token_store::TokenStore;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields";

/// Build the login request from raw input. The email is trimmed; the
/// password is sent exactly as typed and only has to be non-empty.
///
/// # Errors
///
/// Returns `MISSING_FIELDS_MESSAGE` when the trimmed email or the password is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Apply a login outcome to the session and return the text to alert. Only a
/// successful exchange touches the session; failures leave it signed out.
pub fn finish_login(
    session: &mut SessionState,
    outcome: Result<LoginResponse, ApiError>,
    store: &impl TokenStore,
) -> String {
    match outcome {
        Ok(resp) => {
            session.sign_in(resp.access_token, store);
            LOGIN_SUCCESS_MESSAGE.to_owned()
        }
        Err(e) => e.to_string(),
    }
}

#[component]
pub fn LoginForm(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                alert(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::login(&request).await;
            let storage = crate::util::token_store::LocalStorage;
            if let Some(message) = session.try_update(|s| finish_login(s, outcome, &storage)) {
                alert(&message);
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session);
            busy.set(false);
        }
    };

    view! {
        <form id={AuthTab::Login.form_id()} class="auth-form" class:active=move || active.get() on:submit=on_submit>
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
                "Login"
            </button>
        </form>
    }
}
