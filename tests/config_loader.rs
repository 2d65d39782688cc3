use clubhub::config::{Config, ConfigError, ConfigStore, Defaults, StoreConfig};
use std::path::PathBuf;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.defaults.category, "All");
    assert_eq!(config.defaults.upcoming_window_days, 30);
    assert_eq!(config.defaults.notification_limit, 50);
    assert!(config.store.seed_path.is_none());
    assert!(config.store.require_session_for_writes);
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("clubhub/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_blank_category() {
    let config = Config {
        defaults: Defaults {
            category: "  ".to_string(),
            ..Defaults::default()
        },
        store: StoreConfig::default(),
    };
    match config.validate() {
        Err(ConfigError::ValidationError { message }) => {
            assert!(message.contains("defaults.category"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_fails_zero_limits() {
    let mut config = Config::default();
    config.defaults.notification_limit = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    let mut config = Config::default();
    config.defaults.upcoming_window_days = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("upcoming_window_days"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[defaults]
category = "Sports"

[store]
seed_path = "/srv/clubhub/seed.json"
require_session_for_writes = false
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.defaults.category, "Sports");
    assert_eq!(config.defaults.notification_limit, 50);
    assert_eq!(
        config.store.seed_path,
        Some(PathBuf::from("/srv/clubhub/seed.json"))
    );
    assert!(!config.store.require_session_for_writes);
}

#[test]
fn test_parse_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults\ncategory = ").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_invalid_values_in_file_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nnotification_limit = 0\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_config_roundtrip() {
    let mut config = Config::default();
    config.defaults.upcoming_window_days = 14;
    let serialized = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&serialized).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_store_reload_keeps_old_config_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\nnotification_limit = 5\n").unwrap();

    let store = ConfigStore::new(Config::load_from(&path).unwrap(), path.clone());
    assert_eq!(store.get().defaults.notification_limit, 5);

    std::fs::write(&path, "[defaults]\nnotification_limit = 9\n").unwrap();
    store.reload().unwrap();
    assert_eq!(store.get().defaults.notification_limit, 9);

    std::fs::write(&path, "not = [valid").unwrap();
    assert!(store.reload().is_err());
    assert_eq!(store.get().defaults.notification_limit, 9);
    assert_eq!(store.path(), path.as_path());
}
