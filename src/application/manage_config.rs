//! Config management use case

use crate::error::{Result, RosterError};
use crate::infrastructure::{Config, FileSystemWorkspace, Workspace};

/// Service for managing center configuration
pub struct ConfigService {
    workspace: FileSystemWorkspace,
}

impl ConfigService {
    pub fn new(workspace: FileSystemWorkspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "name" => Ok(config.name),
            "data_file" => Ok(config.data_file),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(RosterError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: name, data_file, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "name" => {
                if value.trim().is_empty() {
                    return Err(RosterError::Config("Center name cannot be empty".to_string()));
                }
                config.name = value.to_string();
            }
            "data_file" => {
                Config::validate_data_file(value)?;
                config.data_file = value.to_string();
            }
            "created" => {
                return Err(RosterError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(RosterError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: name, data_file",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
