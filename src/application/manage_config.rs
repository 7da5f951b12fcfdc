//! Config management use case

use crate::domain::entry::validate_highlight_color;
use crate::domain::FontSize;
use crate::error::{DaystoryError, Result};
use crate::infrastructure::{Config, FileSystemStore};

const VALID_KEYS: &str = "font_size, highlight_color, ads_removed, created";

/// Service for managing diary configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "font_size" => Ok(config.font_size.to_string()),
            "highlight_color" => Ok(config.highlight_color),
            "ads_removed" => Ok(config.ads_removed.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DaystoryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "font_size" => {
                config.font_size = value.parse::<FontSize>()?;
            }
            "highlight_color" => {
                let color = value.trim().to_lowercase();
                validate_highlight_color(&color)?;
                config.highlight_color = color;
            }
            "ads_removed" => {
                config.ads_removed = value.trim().parse().map_err(|_| {
                    DaystoryError::Config(format!(
                        "ads_removed must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            "created" => {
                return Err(DaystoryError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DaystoryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.store.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
