//! Configuration management

use crate::error::{Result, RosterError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_DATA_FILE: &str = "center.toml";
pub const DEFAULT_NAME: &str = "Coaching Center";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name of the center, used as the overview heading
    #[serde(default = "default_name")]
    pub name: String,
    /// Data file name, relative to `.roster/`
    #[serde(default = "default_data_file")]
    pub data_file: String,
    pub created: DateTime<Utc>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new(name: Option<String>) -> Self {
        Config {
            name: name.unwrap_or_else(default_name),
            data_file: default_data_file(),
            created: Utc::now(),
        }
    }

    /// Load config from .roster/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".roster").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RosterError::NotRosterDirectory(path.to_path_buf())
            } else {
                RosterError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .roster/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let roster_dir = path.join(".roster");
        let config_path = roster_dir.join("config.toml");

        if !roster_dir.exists() {
            fs::create_dir(&roster_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| RosterError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Reject data file names that would escape the `.roster` directory.
    pub fn validate_data_file(value: &str) -> Result<()> {
        let path = Path::new(value);
        let plain = path.components().count() == 1
            && path.file_name().is_some_and(|n| n == path.as_os_str());
        if value.trim().is_empty() || !plain {
            return Err(RosterError::Config(format!(
                "Invalid data file name: '{}'. Use a plain file name such as {}",
                value, DEFAULT_DATA_FILE
            )));
        }
        Ok(())
    }
}
