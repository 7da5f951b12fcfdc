//! Configuration management

use crate::domain::entry::{validate_highlight_color, FontSize, DEFAULT_HIGHLIGHT_COLOR};
use crate::error::{DaystoryError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DAYSTORY_DIR: &str = ".daystory";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Body font size for new entries
    #[serde(default)]
    pub font_size: FontSize,
    /// Highlighter color used when none is given
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    #[serde(default)]
    pub ads_removed: bool,
    pub created: DateTime<Utc>,
}

fn default_highlight_color() -> String {
    DEFAULT_HIGHLIGHT_COLOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            font_size: FontSize::default(),
            highlight_color: default_highlight_color(),
            ads_removed: false,
            created: Utc::now(),
        }
    }

    /// Load config from .daystory/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(DAYSTORY_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaystoryError::NotDaystoryDirectory(path.to_path_buf())
            } else {
                DaystoryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| DaystoryError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_highlight_color(&config.highlight_color)
            .map_err(|e| DaystoryError::Config(format!("Invalid config.toml: {}", e)))?;
        Ok(config)
    }

    /// Save config to .daystory/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dir = path.join(DAYSTORY_DIR);

        if !dir.exists() {
            fs::create_dir(&dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DaystoryError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }
}
