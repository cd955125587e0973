//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` through Leptos context. The app seeds it
//! from `localStorage` once at startup; login and logout are the only writers.
//! Which page section is visible is derived from it, never stored separately.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::token_store::TokenStore;

/// Top-level page section shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    /// Login/register forms.
    Auth,
    /// Topic input and mindmap container.
    Mindmap,
}

/// Holds the opaque session token, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
}

impl SessionState {
    /// Seed the session from persisted storage.
    pub fn restore(store: &impl TokenStore) -> Self {
        Self { token: store.load() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn active_section(&self) -> Section {
        if self.is_authenticated() { Section::Mindmap } else { Section::Auth }
    }

    /// Adopt a freshly issued token and persist it.
    pub fn sign_in(&mut self, token: String, store: &impl TokenStore) {
        store.save(&token);
        self.token = Some(token);
    }

    /// Drop the token from memory and storage. Returns the token that was
    /// held so the caller can notify the server; `None` when already signed
    /// out, which makes repeated calls harmless.
    pub fn sign_out(&mut self, store: &impl TokenStore) -> Option<String> {
        store.clear();
        self.token.take()
    }
}
