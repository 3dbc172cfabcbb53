//! Builder defaults, optionally loaded from a TOML file
//!
//! ```toml
//! [defaults]
//! font_size = "14px"
//! new_option_label = "Choice"
//! section_title_prefix = "Part"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Defaults applied by the form store
#[derive(Debug, Clone, PartialEq)]
pub struct BuilderConfig {
    /// Global font size given to new fields
    pub font_size: String,
    /// Text of an option appended from the inspector
    pub new_option_label: String,
    /// Prefix of generated section titles ("Section 1", "Section 2", ...)
    pub section_title_prefix: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    defaults: Option<TomlDefaults>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    font_size: Option<String>,
    new_option_label: Option<String>,
    section_title_prefix: Option<String>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            font_size: "16px".to_string(),
            new_option_label: "New Option".to_string(),
            section_title_prefix: "Section".to_string(),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(defaults) = parsed.defaults {
            if let Some(font_size) = defaults.font_size {
                config.font_size = font_size;
            }
            if let Some(label) = defaults.new_option_label {
                config.new_option_label = label;
            }
            if let Some(prefix) = defaults.section_title_prefix {
                config.section_title_prefix = prefix;
            }
        }

        Ok(config)
    }

    /// Set the global font size
    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Set the label of appended options
    pub fn with_new_option_label(mut self, label: impl Into<String>) -> Self {
        self.new_option_label = label.into();
        self
    }

    /// Set the prefix of generated section titles
    pub fn with_section_title_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.section_title_prefix = prefix.into();
        self
    }
}
