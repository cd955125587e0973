use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/mindmap")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/mindmap");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.session_ttl_secs, DEFAULT_SESSION_TTL_SECS);
}

#[test]
fn from_lookup_requires_database_url() {
    let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
}

#[test]
fn from_lookup_rejects_blank_database_url() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
}

#[test]
fn from_lookup_parses_overrides() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/mindmap"),
        ("PORT", " 8080 "),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SESSION_TTL_SECS", "3600"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.session_ttl_secs, 3600);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn from_lookup_rejects_non_positive_ttl() {
    let err =
        AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db"), ("SESSION_TTL_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_TTL_SECS", .. }));
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(ConfigError::Missing { var: "DATABASE_URL" }.to_string(), "DATABASE_URL is required");
    assert_eq!(
        ConfigError::Invalid { var: "PORT", value: "x".to_owned() }.to_string(),
        "PORT has invalid value \"x\""
    );
}
