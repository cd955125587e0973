use super::*;

#[test]
fn validate_register_input_trims_identity_fields() {
    assert_eq!(
        validate_register_input(" alice ", " a@b.io ", "secret1"),
        Ok(RegisterRequest {
            username: "alice".to_owned(),
            email: "a@b.io".to_owned(),
            password: "secret1".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "a@b.io", "secret1"), Err("Please fill in all fields"));
    assert_eq!(validate_register_input("alice", " ", "secret1"), Err(MISSING_FIELDS_MESSAGE));
    assert_eq!(validate_register_input("alice", "a@b.io", ""), Err(MISSING_FIELDS_MESSAGE));
}

#[test]
fn validate_register_input_accepts_whitespace_password() {
    let request = validate_register_input("alice", "a@b.io", "      ").unwrap();
    assert_eq!(request.password, "      ");
}
