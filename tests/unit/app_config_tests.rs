/*!
 * Tests for app configuration
 */

use anyhow::Result;
use storylens::app_config::{Config, DisplayConfig, LogLevel};
use crate::common;

/// Test default configuration values
#[test]
fn test_config_default_shouldMatchDocumentedDefaults() {
    let config = Config::default();
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(!config.display.show_literal_bullets);
    assert!(!config.display.show_ai_bullets);
    assert!(!config.display.show_cultural);
    assert!(!config.display.show_clarification);
    assert!(config.display.color_pos);
    assert_eq!(config.display.font_size, 14);
    assert!(config.validate().is_ok());
}

/// Test save/load round trip preserves all fields
#[test]
fn test_config_roundTrip_withCustomValues_shouldPreserveFields() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("storylens-conf.json");

    let mut config = Config::default();
    config.story_dir = dir.path().join("stories");
    config.display.show_cultural = true;
    config.display.font_size = 18;
    config.log_level = LogLevel::Debug;
    config.save(&path)?;

    let loaded = Config::from_file(&path)?;
    assert_eq!(loaded.story_dir, config.story_dir);
    assert_eq!(loaded.display, config.display);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    Ok(())
}

/// Test missing fields fall back to serde defaults
#[test]
fn test_config_fromFile_withPartialJson_shouldFillDefaults() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"story_dir": "/tmp/stories"}"#)?;

    let config = Config::from_file(&path)?;
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.display, DisplayConfig::default());
    Ok(())
}

/// Test font size validation bounds
#[test]
fn test_config_validate_withBadFontSize_shouldFail() {
    let mut config = Config::default();
    config.display.font_size = 4;
    assert!(config.validate().is_err());
    config.display.font_size = 100;
    assert!(config.validate().is_err());
    config.display.font_size = 14;
    assert!(config.validate().is_ok());
}

/// Test the toggle mapping into display options
#[test]
fn test_display_config_options_shouldMapAllToggles() {
    let display = DisplayConfig {
        show_literal_bullets: true,
        show_ai_bullets: false,
        show_cultural: true,
        show_clarification: false,
        color_pos: false,
        font_size: 14,
    };
    let opts = display.options();
    assert!(opts.show_literal_bullets);
    assert!(!opts.show_ai_bullets);
    assert!(opts.show_cultural);
    assert!(!opts.show_clarification);
    assert!(!opts.color_pos);
}
