//! Whole-state persistence of the roster

use crate::domain::snapshot::FORMAT_VERSION;
use crate::domain::Snapshot;
use crate::error::{Result, RosterError};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Somewhere a snapshot can be written to and read back from.
pub trait RosterStore {
    /// Read the stored state, or an empty snapshot if nothing was saved yet.
    fn load(&self) -> Result<Snapshot>;

    /// Replace the stored state with `snapshot`.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

/// Stores the snapshot as a single TOML file.
///
/// Saves overwrite the file in place. A crash mid-write can leave a
/// truncated file, which the next load reports as corrupt.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        FileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corrupt(&self, reason: impl ToString) -> RosterError {
        RosterError::CorruptState {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RosterStore for FileStore {
    fn load(&self) -> Result<Snapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No data file at {}, starting empty", self.path.display());
                return Ok(Snapshot::default());
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => return Err(self.corrupt(e)),
            Err(e) => return Err(RosterError::Io(e)),
        };

        let snapshot: Snapshot = toml::from_str(&contents).map_err(|e| self.corrupt(e))?;

        if snapshot.format_version > FORMAT_VERSION {
            return Err(self.corrupt(format!(
                "format version {} is newer than supported version {}",
                snapshot.format_version, FORMAT_VERSION
            )));
        }

        if let Some(reason) = snapshot.repeated_key() {
            return Err(self.corrupt(reason));
        }

        debug!(
            "Loaded {} student(s), {} course(s), {} enrollment(s) from {}",
            snapshot.students.len(),
            snapshot.courses.len(),
            snapshot.enrollments.len(),
            self.path.display()
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(snapshot)?;
        fs::write(&self.path, contents)?;

        debug!("Saved roster to {}", self.path.display());
        Ok(())
    }
}
