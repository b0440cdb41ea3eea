use sc_domain::config::{Config, ConfigSeverity};

#[test]
fn default_base_url_is_local() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:4000");
}

#[test]
fn default_timeout_is_eight_seconds() {
    let config = Config::default();
    assert_eq!(config.api.timeout_ms, 8000);
}

#[test]
fn empty_toml_resolves_to_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.api.base_url, Config::default().api.base_url);
    assert_eq!(config.session.state_path, Config::default().session.state_path);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let toml_str = r#"
[api]
base_url = "https://showcase.example.edu/api"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.api.base_url, "https://showcase.example.edu/api");
    assert_eq!(config.api.timeout_ms, 8000);
}

#[test]
fn defaults_validate_clean() {
    let config = Config::default();
    let errors: Vec<_> = config
        .validate()
        .into_iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .collect();
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn non_http_base_url_is_an_error() {
    let toml_str = r#"
[api]
base_url = "ftp://showcase.example.edu"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert!(issues
        .iter()
        .any(|i| i.severity == ConfigSeverity::Error && i.field == "api.base_url"));
}

#[test]
fn plain_http_to_remote_host_warns() {
    let toml_str = r#"
[api]
base_url = "http://showcase.example.edu"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert!(issues
        .iter()
        .any(|i| i.severity == ConfigSeverity::Warning && i.field == "api.base_url"));
}

#[test]
fn zero_timeout_is_an_error() {
    let toml_str = r#"
[api]
timeout_ms = 0
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    let issues = config.validate();
    assert!(issues
        .iter()
        .any(|i| i.severity == ConfigSeverity::Error && i.field == "api.timeout_ms"));
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();
    let dumped = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&dumped).unwrap();
    assert_eq!(parsed.api.base_url, config.api.base_url);
    assert_eq!(parsed.api.timeout_ms, config.api.timeout_ms);
}
