use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::display::DisplayOptions;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Root directory holding the story folders
    #[serde(default = "default_story_dir")]
    pub story_dir: PathBuf,

    /// Display defaults
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Default values for the five display toggles and the font size
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    // @field: Detail mode for the literal-mapping section
    #[serde(default)]
    pub show_literal_bullets: bool,

    // @field: Detail mode for the AI-translation section
    #[serde(default)]
    pub show_ai_bullets: bool,

    // @field: Show the cultural-context row
    #[serde(default)]
    pub show_cultural: bool,

    // @field: Show the clarification row
    #[serde(default)]
    pub show_clarification: bool,

    // @field: Color payloads by part-of-speech tag
    #[serde(default = "default_true")]
    pub color_pos: bool,

    // @field: Font size in pixels for rendered pages
    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            show_literal_bullets: false,
            show_ai_bullets: false,
            show_cultural: false,
            show_clarification: false,
            color_pos: true,
            font_size: default_font_size(),
        }
    }
}

impl DisplayConfig {
    /// The toggle set the display core consumes
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            show_literal_bullets: self.show_literal_bullets,
            show_ai_bullets: self.show_ai_bullets,
            show_cultural: self.show_cultural,
            show_clarification: self.show_clarification,
            color_pos: self.color_pos,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_true() -> bool {
    true
}

fn default_font_size() -> u32 {
    14
}

fn default_story_dir() -> PathBuf {
    // Fall back to a relative folder when no home directory is available
    dirs::home_dir()
        .map(|home| home.join("storylens").join("stories"))
        .unwrap_or_else(|| PathBuf::from("stories"))
}

impl Default for Config {
    fn default() -> Self {
        Config {
            story_dir: default_story_dir(),
            display: DisplayConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<()> {
        if self.story_dir.as_os_str().is_empty() {
            return Err(anyhow!("story_dir must not be empty"));
        }
        if !(8..=72).contains(&self.display.font_size) {
            return Err(anyhow!(
                "font_size {} out of range (8-72)",
                self.display.font_size
            ));
        }
        Ok(())
    }
}
