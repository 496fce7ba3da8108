//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod store;
pub mod workspace;

pub use config::Config;
pub use store::{FileStore, RosterStore};
pub use workspace::{FileSystemWorkspace, Workspace};
