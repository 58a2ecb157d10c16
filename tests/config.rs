use utilkit::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.display.date_format, "%Y-%m-%d");
    assert_eq!(config.display.time_format, "%H:%M");
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.demo.output, "text");
    assert!(!config.demo.identifiers.is_empty());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid date format should fail
    config.display.date_format = "not a format".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid output format
    config.display.date_format = "%Y-%m-%d".to_string();
    config.demo.output = "xml".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.demo.output = "json".to_string();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("date_format = \"%Y-%m-%d\""));
    assert!(toml_str.contains("output = \"text\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[logging]
enabled = true
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");

    // Unspecified values use defaults
    assert_eq!(config.display.date_format, "%Y-%m-%d");
    assert_eq!(config.demo.output, "text");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.display.time_format, Config::default().display.time_format);
    assert_eq!(config.demo.identifiers, Config::default().demo.identifiers);
}

#[test]
fn test_log_level_parses() {
    let config = Config::default();
    assert_eq!(config.log_level().unwrap(), log::LevelFilter::Info);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("utilkit_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(temp_dir.exists());
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# UtilKit Configuration File"));
    assert!(content.contains("date_format = \"%Y-%m-%d\""));

    // Generated file round-trips through the loader
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.display.date_format, Config::default().display.date_format);
    assert_eq!(loaded.demo.identifiers, Config::default().demo.identifiers);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_default_config_path_is_under_xdg_dir() {
    // Skippable on hosts with no config directory at all
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("utilkit/config.toml"));
        assert!(path.starts_with(Config::get_xdg_config_dir().unwrap()));
    }
}
