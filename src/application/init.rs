//! Initialize center use case

use crate::domain::Snapshot;
use crate::error::Result;
use crate::infrastructure::{Config, FileStore, FileSystemWorkspace, RosterStore, Workspace};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new center at the specified path with an empty data file.
pub fn init(path: &Path, name: Option<String>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let workspace = FileSystemWorkspace::new(path.to_path_buf());
    workspace.initialize()?;

    let config = Config::new(name);
    workspace.save_config(&config)?;

    FileStore::new(workspace.data_path(&config)).save(&Snapshot::default())?;

    info!("Initialized roster at {}", path.display());
    Ok(config)
}
