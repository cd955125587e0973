//! Auth view switcher state.
//!
//! DESIGN
//! ======
//! The active tab is a single enum value, so "exactly one tab active" holds by
//! construction. Tabs are addressed by their string identifiers, which are
//! also used as DOM ids (`loginForm`, `registerForm`).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Tabs of the auth section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::Register];

    pub fn id(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// DOM id of the form this tab reveals.
    pub fn form_id(self) -> &'static str {
        match self {
            Self::Login => "loginForm",
            Self::Register => "registerForm",
        }
    }
}

/// UI state for the auth section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub auth_tab: AuthTab,
}

impl UiState {
    pub fn is_active(&self, tab: AuthTab) -> bool {
        self.auth_tab == tab
    }

    /// Activate the tab named by `id`. Unknown ids leave the state unchanged
    /// and return `false`.
    pub fn switch_tab(&mut self, id: &str) -> bool {
        match AuthTab::from_id(id) {
            Some(tab) => {
                self.auth_tab = tab;
                true
            }
            None => false,
        }
    }
}
