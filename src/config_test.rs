use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.cors_origin, "http://localhost:3000");
    assert_eq!(cfg.mock_user_id, "mock-user-id");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("CORS_ORIGIN", "https://apacks.example"),
        ("MOCK_USER_ID", "u-42"),
    ]))
    .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.cors_origin, "https://apacks.example");
    assert_eq!(cfg.mock_user_id, "u-42");
    assert_eq!(cfg.listen_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn invalid_port_is_rejected() {
    for raw in ["http", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()), "PORT={raw:?}");
    }
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn blank_cors_origin_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", " ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyCorsOrigin);
}

#[test]
fn listen_addr_rejects_hostnames() {
    let cfg = ServerConfig { host: "localhost".to_owned(), ..ServerConfig::default() };
    assert_eq!(cfg.listen_addr().unwrap_err(), ConfigError::InvalidAddress("localhost:3000".to_owned()));
}
