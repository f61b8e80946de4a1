use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_vars(|key| vars.get(key).cloned())
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.api_timeout, Duration::from_secs(DEFAULT_API_TIMEOUT_SECS));
    assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_MB * 1024 * 1024);
}

#[test]
fn overrides_are_parsed() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("FILMREC_API_URL", "https://api.example.test/"),
        ("FILMREC_API_TIMEOUT_SECS", "5"),
        ("FILMREC_MAX_UPLOAD_MB", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.api_timeout, Duration::from_secs(5));
    assert_eq!(cfg.max_upload_bytes, 2 * 1024 * 1024);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = config_from(&[("PORT", "  "), ("FILMREC_API_URL", "")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn unparseable_port_is_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned(), reason: "not a number" });
}

#[test]
fn zero_timeout_is_rejected() {
    let err = config_from(&[("FILMREC_API_TIMEOUT_SECS", "0")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "FILMREC_API_TIMEOUT_SECS", .. }));
}

#[test]
fn zero_upload_limit_is_rejected() {
    assert!(config_from(&[("FILMREC_MAX_UPLOAD_MB", "0")]).is_err());
}

#[test]
fn non_http_api_url_is_rejected() {
    let err = config_from(&[("FILMREC_API_URL", "ftp://files.example.test")]).unwrap_err();
    assert!(err.to_string().contains("FILMREC_API_URL"));
    assert!(config_from(&[("FILMREC_API_URL", "http://")]).is_err());
}
