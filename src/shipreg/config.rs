//! # Configuration
//!
//! Stored as `config.json` in the data directory. Missing files and missing
//! keys fall back to the compiled defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data-file` | `ships.json` | File name of the ship table inside the data directory |
//! | `page-size` | `3` | Page size for listings that do not request one |

use crate::error::{Result, ShipError};
use crate::query::DEFAULT_PAGE_SIZE;
use crate::store::fs::DEFAULT_DATA_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 2] = ["data-file", "page-size"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShipregConfig {
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ShipregConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
        }
    }
}

impl ShipregConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShipError::Io)?;
        let config: ShipregConfig =
            serde_json::from_str(&content).map_err(ShipError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShipError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShipError::Serialization)?;
        fs::write(config_path, content).map_err(ShipError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "data-file" => Ok(self.data_file.clone()),
            "page-size" => Ok(self.page_size.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                let value = value.trim();
                if value.is_empty() || value.contains(|c: char| c == '/' || c == '\\') {
                    return Err(ShipError::MalformedInput(format!(
                        "data-file must be a plain file name, got '{}'",
                        value
                    )));
                }
                self.data_file = value.to_string();
            }
            "page-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    ShipError::MalformedInput(format!("page-size must be a number, got '{}'", value))
                })?;
                if size == 0 {
                    return Err(ShipError::MalformedInput(
                        "page-size must be at least 1".to_string(),
                    ));
                }
                self.page_size = size;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ShipError {
    ShipError::MalformedInput(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        KEYS.join(", ")
    ))
}
