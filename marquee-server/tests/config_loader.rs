use std::{collections::HashMap, fs, time::Duration};

use marquee_server::infra::config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader,
    models::{DEFAULT_PORT, DEFAULT_SEARCH_DELAY, default_content_path},
    sources::EnvConfig,
};

fn env(pairs: &[(&str, &str)]) -> EnvConfig {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    EnvConfig::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_apply_without_file_or_env() {
    let load = ConfigLoader::new().with_env(env(&[])).load().expect("load");
    let config = load.config;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.search.delay, DEFAULT_SEARCH_DELAY);
    assert_eq!(config.content.path, default_content_path());
    assert!(config.cors.is_permissive());
    assert!(config.metadata.config_path.is_none());
    assert!(
        load.warnings
            .items
            .iter()
            .any(|w| w.message.contains("marquee.toml"))
    );
}

#[test]
fn file_values_are_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("marquee.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 4000

[search]
delay_ms = 250

[cors]
allowed_origins = ["http://app.test"]
"#,
    )
    .expect("write config");

    let load = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(env(&[]))
        .load()
        .expect("load");
    let config = load.config;

    assert_eq!(config.bind_address(), "127.0.0.1:4000");
    assert_eq!(config.search.delay, Duration::from_millis(250));
    assert_eq!(config.cors.allowed_origins, vec!["http://app.test"]);
    assert!(!config.cors.is_permissive());
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty(), "{:?}", load.warnings.items);
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("marquee.toml");
    fs::write(&path, "[server]\nport = 4000\n\n[search]\ndelay_ms = 250\n")
        .expect("write config");

    let config = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(env(&[("SERVER_PORT", "5000"), ("SEARCH_DELAY_MS", "0")]))
        .load()
        .expect("load")
        .config;

    assert_eq!(config.server.port, 5000);
    assert!(config.search.delay.is_zero());
}

#[test]
fn config_path_can_come_from_environment() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.toml");
    fs::write(&path, "[server]\nport = 4100\n").expect("write config");

    let config = ConfigLoader::new()
        .with_env(env(&[("MARQUEE_CONFIG", path.to_str().expect("utf8"))]))
        .load()
        .expect("load")
        .config;
    assert_eq!(config.server.port, 4100);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env(env(&[]))
        .load()
        .expect_err("missing file");
    assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("marquee.toml");
    fs::write(&path, "[server\nport = ").expect("write config");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .with_env(env(&[]))
        .load()
        .expect_err("bad toml");
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn guard_rails_reject_blank_host() {
    let err = ConfigLoader::new()
        .with_env(env(&[("SERVER_HOST", "  ")]))
        .load()
        .expect_err("blank host");
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::EmptyHost)
    ));
}

#[test]
fn missing_content_file_is_only_a_warning() {
    let load = ConfigLoader::new()
        .with_env(env(&[("CONTENT_PATH", "/definitely/not/here.json")]))
        .load()
        .expect("load");
    assert!(
        load.warnings
            .items
            .iter()
            .any(|w| w.message.contains("/definitely/not/here.json"))
    );
}
