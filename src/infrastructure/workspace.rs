//! Center directory discovery and layout

use crate::error::{Result, RosterError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract view of a center directory
pub trait Workspace {
    /// Get the root directory of this workspace
    fn root(&self) -> &Path;

    /// Load configuration from .roster/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .roster/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .roster directory exists
    fn is_initialized(&self) -> bool;

    /// Create .roster directory structure
    fn initialize(&self) -> Result<()>;

    /// Path of the data file named by the config
    fn data_path(&self, config: &Config) -> PathBuf {
        self.root().join(".roster").join(&config.data_file)
    }
}

/// File system implementation of Workspace
#[derive(Debug, Clone)]
pub struct FileSystemWorkspace {
    pub root: PathBuf,
}

impl FileSystemWorkspace {
    pub fn new(root: PathBuf) -> Self {
        FileSystemWorkspace { root }
    }

    /// Discover the center root by walking up from current directory
    /// First checks ROSTER_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("ROSTER_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_roster_dir(&path) {
                return Ok(FileSystemWorkspace::new(path));
            } else {
                return Err(RosterError::Config(format!(
                    "ROSTER_ROOT is set to '{}' but no .roster directory found. \
                    Run 'roster init' in that directory or unset ROSTER_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the center root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_roster_dir(&current) {
                return Ok(FileSystemWorkspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(RosterError::NotRosterDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_roster_dir(path: &Path) -> bool {
        path.join(".roster").is_dir()
    }
}

impl Workspace for FileSystemWorkspace {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_roster_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(RosterError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(self.root.join(".roster"))?;
        Ok(())
    }
}
