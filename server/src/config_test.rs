use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_url, "http://localhost:8080/api");
    assert_eq!(config.session_cookie, "authToken");
}

#[test]
fn reads_all_values() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8081"),
        ("POSTDESK_API_URL", "https://api.example.com/v1/"),
        ("SESSION_COOKIE", "sid"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8081);
    assert_eq!(config.api_url, "https://api.example.com/v1");
    assert_eq!(config.session_cookie, "sid");
}

#[test]
fn blank_values_fall_back() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("PORT", " "), ("POSTDESK_API_URL", ""), ("SESSION_COOKIE", "  ")]))
            .unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.api_url, "http://localhost:8080/api");
    assert_eq!(config.session_cookie, "authToken");
}

#[test]
fn invalid_port_is_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn out_of_range_port_is_error() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
