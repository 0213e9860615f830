/*!
 * Tests for application configuration loading and validation
 */

use anyhow::Result;
use shownamer::app_config::{Config, LogLevel};

use crate::common;

/// Test that the default configuration is valid
#[test]
fn test_default_config_shouldPassValidation() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.catalog.use_cache);
    assert!(config.video_extensions.contains(&"mkv".to_string()));
}

/// Test that a saved configuration loads back identically
#[test]
fn test_config_saveAndLoad_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.catalog.api_key = "secret".to_string();
    config.catalog.language = "fr".to_string();
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.catalog.api_key, "secret");
    assert_eq!(loaded.catalog.language, "fr");

    Ok(())
}

/// Test that missing fields fall back to defaults
#[test]
fn test_config_fromPartialJson_shouldApplyDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "catalog": { "api_key": "secret" } }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.catalog.api_key, "secret");
    assert_eq!(config.catalog.base_url, "https://api.thetvdb.com");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.video_extensions.is_empty());

    Ok(())
}

/// Test that lowercase log level names parse from JSON
#[test]
fn test_config_withLowercaseLogLevel_shouldParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "log_level": "debug" }"#,
    )?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.log_level, LogLevel::Debug);

    Ok(())
}

/// Test that an empty extension list is rejected
#[test]
fn test_config_withNoExtensions_shouldFailValidation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        r#"{ "video_extensions": [] }"#,
    )?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}

/// Test that unreadable JSON is reported as an error
#[test]
fn test_config_withMalformedJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        &temp_dir.path().to_path_buf(),
        "conf.json",
        "not json at all",
    )?;

    assert!(Config::from_file(&path).is_err());

    Ok(())
}
