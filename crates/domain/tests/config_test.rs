use dnsrpc_domain::config::{Config, LogFormat};

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.server.dns_port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert!(config.server.udp);
    assert!(config.server.tcp);
    assert_eq!(config.dns.default_ttl, 300);
    assert_eq!(config.dns.help_ttl, 86_400);
    assert_eq!(config.dns.aerial_ttl, 900);
    assert_eq!(config.cache.ttl_secs, 300);
    assert!(config.cache.max_entries.is_none());
    assert_eq!(config.providers.timeout_secs, 10);
    assert_eq!(config.providers.openai_model, "gpt-4o-mini-2024-07-18");
    assert_eq!(config.providers.openai_max_tokens, 100);
    assert_eq!(config.providers.dns_ttl_secs, 30);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        dns_port = 5353

        [cache]
        ttl_secs = 60
        max_entries = 1000

        [logging]
        format = "json"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.dns_port, 5353);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.cache.ttl_secs, 60);
    assert_eq!(config.cache.max_entries, Some(1000));
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(config.dns.default_ttl, 300);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let err = Config::from_toml("[server\ndns_port = 1").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse config"));
}

#[test]
fn test_env_overrides_fill_credentials() {
    let mut config = Config::default();
    config.apply_env_overrides(|key| match key {
        "OPENAI_API_KEY" => Some("sk-test".to_string()),
        "EXCHANGE_RATE_API_KEY" => Some(String::new()),
        "DNS_TTL" => Some("45".to_string()),
        _ => None,
    });

    assert_eq!(config.providers.openai_api_key.as_deref(), Some("sk-test"));
    assert!(config.providers.exchange_rate_api_key.is_none());
    assert_eq!(config.providers.dns_ttl_secs, 45);
}

#[test]
fn test_validate_rejects_zero_port() {
    let mut config = Config::default();
    config.server.dns_port = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_no_transport() {
    let mut config = Config::default();
    config.server.udp = false;
    config.server.tcp = false;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_cache_bound() {
    let mut config = Config::default();
    config.cache.max_entries = Some(0);
    assert!(config.validate().is_err());
}
