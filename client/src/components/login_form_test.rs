use super::*;
use crate::state::session::Section;
use crate::util::token_store::MemoryTokenStore;

fn login_response(token: &str) -> LoginResponse {
    LoginResponse { access_token: token.to_owned(), message: None, user: None }
}

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  a@b.io ", " secret "),
        Ok(LoginRequest { email: "a@b.io".to_owned(), password: " secret ".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("a@b.io", ""), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_login_input("   ", "secret"), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_login_input_accepts_whitespace_password() {
    assert_eq!(
        validate_login_input("a@b.io", "      "),
        Ok(LoginRequest { email: "a@b.io".to_owned(), password: "      ".to_owned() })
    );
}

#[test]
fn finish_login_success_persists_token_and_reveals_mindmap() {
    let store = MemoryTokenStore::default();
    let mut session = SessionState::default();

    let message = finish_login(&mut session, Ok(login_response("tok-1")), &store);

    assert_eq!(message, "Login successful!");
    assert_eq!(store.load().as_deref(), Some("tok-1"));
    assert_eq!(session.active_section(), Section::Mindmap);
}

#[test]
fn finish_login_server_failure_shows_message_and_keeps_auth_view() {
    let store = MemoryTokenStore::default();
    let mut session = SessionState::default();

    let outcome = Err(ApiError::Server("Invalid credentials".to_owned()));
    let message = finish_login(&mut session, outcome, &store);

    assert_eq!(message, "Invalid credentials");
    assert_eq!(session.active_section(), Section::Auth);
    assert_eq!(store.load(), None);
}

#[test]
fn finish_login_network_failure_keeps_auth_view() {
    let store = MemoryTokenStore::default();
    let mut session = SessionState::default();

    let message = finish_login(&mut session, Err(ApiError::Network), &store);

    assert_eq!(message, "Network error. Please try again.");
    assert!(!session.is_authenticated());
}
