use super::*;

#[test]
fn join_url_handles_slashes() {
    assert_eq!(join_url("/api", "auth/login"), "/api/auth/login");
    assert_eq!(join_url("/api/", "/auth/login"), "/api/auth/login");
    assert_eq!(
        join_url("http://localhost:5000/api", "auth/register"),
        "http://localhost:5000/api/auth/register"
    );
}

#[test]
fn endpoint_uses_configured_base() {
    assert!(endpoint("auth/login").ends_with("/auth/login"));
    assert!(endpoint("auth/login").starts_with(API_BASE_URL.trim_end_matches('/')));
}

#[test]
fn interpret_login_success_returns_token() {
    let resp = interpret_login(true, r#"{"access_token":"tok-1"}"#).unwrap();
    assert_eq!(resp.access_token, "tok-1");
}

#[test]
fn interpret_login_surfaces_server_message() {
    let err = interpret_login(false, r#"{"message":"Invalid credentials"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("Invalid credentials".to_owned()));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn interpret_login_falls_back_without_message() {
    assert_eq!(interpret_login(false, "{}").unwrap_err(), ApiError::Server("Login failed".to_owned()));
    assert_eq!(
        interpret_login(false, "<html>502</html>").unwrap_err(),
        ApiError::Server("Login failed".to_owned())
    );
    assert_eq!(
        interpret_login(false, r#"{"message":"  "}"#).unwrap_err(),
        ApiError::Server("Login failed".to_owned())
    );
}

#[test]
fn interpret_login_undecodable_success_is_network_error() {
    assert_eq!(interpret_login(true, "not json").unwrap_err(), ApiError::Network);
    assert_eq!(interpret_login(true, r#"{"message":"ok"}"#).unwrap_err(), ApiError::Network);
}

#[test]
fn interpret_register_success_variants() {
    let resp = interpret_register(true, r#"{"message":"User registered successfully","user_id":"u1"}"#).unwrap();
    assert_eq!(resp.message.as_deref(), Some("User registered successfully"));
    assert_eq!(resp.user_id.as_deref(), Some("u1"));
    assert_eq!(interpret_register(true, "").unwrap(), MessageResponse::default());
}

#[test]
fn interpret_register_failure_uses_message_or_fallback() {
    assert_eq!(
        interpret_register(false, r#"{"message":"Email already registered"}"#).unwrap_err(),
        ApiError::Server("Email already registered".to_owned())
    );
    assert_eq!(interpret_register(false, "").unwrap_err(), ApiError::Server("Registration failed".to_owned()));
}

#[test]
fn network_error_message_matches_display() {
    assert_eq!(ApiError::Network.to_string(), NETWORK_ERROR_MESSAGE);
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}
