//! Error types for roster

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Student not found: {0}")]
    StudentNotFound(u32),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Course already exists: {0}")]
    DuplicateCourse(String),

    #[error("Student {student_id} is already enrolled in {course}")]
    AlreadyEnrolled { student_id: u32, course: String },

    #[error("Corrupt data file {}: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a roster directory: {0}")]
    NotRosterDirectory(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Coarse classification of a failed call, for callers that branch on
/// the outcome rather than the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    CorruptState,
    PersistenceIo,
    Workspace,
}

impl RosterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RosterError::Validation(_) => ErrorKind::Validation,
            RosterError::StudentNotFound(_) | RosterError::CourseNotFound(_) => {
                ErrorKind::NotFound
            }
            RosterError::DuplicateCourse(_) | RosterError::AlreadyEnrolled { .. } => {
                ErrorKind::Conflict
            }
            RosterError::CorruptState { .. } => ErrorKind::CorruptState,
            RosterError::Io(_) | RosterError::TomlSerialize(_) => ErrorKind::PersistenceIo,
            RosterError::NotRosterDirectory(_) | RosterError::Config(_) => ErrorKind::Workspace,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Workspace => 2,
            ErrorKind::Validation => 3,
            ErrorKind::NotFound => 4,
            ErrorKind::Conflict => 5,
            ErrorKind::CorruptState => 6,
            ErrorKind::PersistenceIo => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            RosterError::NotRosterDirectory(path) => {
                format!(
                    "Not a roster directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'roster init' in this directory to create a new center\n\
                    • Navigate to an existing roster directory\n\
                    • Set ROSTER_ROOT environment variable to your center path",
                    path.display()
                )
            }
            RosterError::StudentNotFound(id) => {
                format!(
                    "Student not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'roster student list' to see registered students and their ids",
                    id
                )
            }
            RosterError::CourseNotFound(name) => {
                format!(
                    "Course not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'roster course list' to see available courses\n\
                    • Course names are case-insensitive",
                    name
                )
            }
            RosterError::DuplicateCourse(name) => {
                format!(
                    "Course already exists: '{}'\n\n\
                    Course names are case-insensitive, so 'Math' and 'math' are the same course.",
                    name
                )
            }
            RosterError::CorruptState { path, reason } => {
                format!(
                    "Corrupt data file {}: {}\n\n\
                    Suggestions:\n\
                    • Restore the file from a backup\n\
                    • Move it aside to start with an empty center",
                    path.display(),
                    reason
                )
            }
            RosterError::Validation(msg) if msg.starts_with("age") => {
                format!(
                    "Invalid input: {}\n\n\
                    Age must be a positive whole number.\n\
                    Example: roster student add --name Alice --age 20 --contact 555 --email a@x.com",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;
