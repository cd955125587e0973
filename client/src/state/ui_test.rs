use super::*;

// =============================================================
// AuthTab
// =============================================================

#[test]
fn auth_tab_default_is_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
    assert_eq!(UiState::default().auth_tab, AuthTab::Login);
}

#[test]
fn auth_tab_ids_resolve_back() {
    for tab in AuthTab::ALL {
        assert_eq!(AuthTab::from_id(tab.id()), Some(tab));
    }
    assert_eq!(AuthTab::from_id("settings"), None);
    assert_eq!(AuthTab::from_id("Login"), None);
}

#[test]
fn auth_tab_form_ids_match_page_structure() {
    assert_eq!(AuthTab::Login.form_id(), "loginForm");
    assert_eq!(AuthTab::Register.form_id(), "registerForm");
}

// =============================================================
// UiState::switch_tab
// =============================================================

#[test]
fn switch_tab_activates_exactly_one_tab() {
    let mut ui = UiState::default();
    assert!(ui.switch_tab("register"));
    assert!(ui.is_active(AuthTab::Register));
    assert!(!ui.is_active(AuthTab::Login));

    assert!(ui.switch_tab("login"));
    assert_eq!(AuthTab::ALL.iter().filter(|t| ui.is_active(**t)).count(), 1);
    assert!(ui.is_active(AuthTab::Login));
}

#[test]
fn switch_tab_ignores_unknown_identifier() {
    let mut ui = UiState::default();
    ui.switch_tab("register");
    assert!(!ui.switch_tab("bogus"));
    assert_eq!(ui.auth_tab, AuthTab::Register);
}
