use std::path::PathBuf;
use todocat::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(!config.storage.in_memory);
    assert!(config.storage.database_path.is_none());
    assert!(!config.todos.allow_empty_title);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid log level should fail
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    // Reset and test conflicting storage settings
    config.logging.level = "debug".to_string();
    config.storage.in_memory = true;
    config.storage.database_path = Some(PathBuf::from("todos.sqlite"));
    assert!(config.validate().is_err());

    // Empty database path should fail
    config.storage.in_memory = false;
    config.storage.database_path = Some(PathBuf::new());
    assert!(config.validate().is_err());
}

#[test]
fn test_database_path_cannot_be_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.storage.database_path = Some(dir.path().to_path_buf());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("allow_empty_title = false"));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[storage]
in_memory = true

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert!(config.storage.in_memory);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.logging.level, "info");
    assert!(!config.todos.allow_empty_title);
    assert!(config.storage.database_path.is_none());
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.storage.in_memory, default_config.storage.in_memory);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
    assert_eq!(config.todos.allow_empty_title, default_config.todos.allow_empty_title);
}

#[test]
fn test_resolved_database_path() {
    let mut config = Config::default();

    config.storage.in_memory = true;
    assert!(config.storage.resolved_database_path().unwrap().is_none());

    config.storage.in_memory = false;
    config.storage.database_path = Some(PathBuf::from("/tmp/custom.sqlite"));
    assert_eq!(
        config.storage.resolved_database_path().unwrap(),
        Some(PathBuf::from("/tmp/custom.sqlite"))
    );
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todocat").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# todocat configuration file"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.logging.level, "info");
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}
