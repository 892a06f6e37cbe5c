//! Unit tests for configuration helpers

use troyonix::config::{is_production, ServerConfig, DEFAULT_LONG_WINDOW, DEFAULT_RSI_WINDOW, DEFAULT_SHORT_WINDOW};

#[test]
fn test_server_config_default() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
}

#[test]
fn test_server_config_from_vars() {
    let config = ServerConfig::from_vars(Some("127.0.0.1"), Some("9000"));
    assert_eq!(config.bind_address(), "127.0.0.1:9000");
}

#[test]
fn test_server_config_falls_back_on_bad_values() {
    let config = ServerConfig::from_vars(Some("  "), Some("not-a-port"));
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_production_environment_names() {
    assert!(is_production("production"));
    assert!(is_production("prod"));
    assert!(!is_production("sandbox"));
}

#[test]
fn test_indicator_defaults() {
    assert_eq!(DEFAULT_SHORT_WINDOW, 20);
    assert_eq!(DEFAULT_LONG_WINDOW, 50);
    assert_eq!(DEFAULT_RSI_WINDOW, 14);
}
