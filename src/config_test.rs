use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn empty_environment_yields_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("LOG_LEVEL", ""), ("ASSETS_DIR", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(cfg.assets_dir, None);
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn overrides_are_applied() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BIND_HOST", "127.0.0.1"),
        ("ASSETS_DIR", "/srv/portfolio"),
        ("LOG_LEVEL", "debug"),
    ]))
    .unwrap();

    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.assets_dir, Some(PathBuf::from("/srv/portfolio")));
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn ipv6_host_is_accepted() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_HOST", "::1"), ("PORT", "4000")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:4000");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn non_numeric_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "http".into() });
}

#[test]
fn zero_and_overflowing_ports_are_rejected() {
    for raw in ["0", "65536", "-1"] {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }), "{raw} should be rejected");
    }
}

#[test]
fn hostname_is_rejected_as_bind_host() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost { value: "localhost".into() });
    assert!(err.to_string().contains("BIND_HOST"));
}
