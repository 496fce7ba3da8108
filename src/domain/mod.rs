//! Domain layer - Records, invariants and derived views

pub mod course;
pub mod enrollment;
pub mod overview;
pub mod roster;
pub mod snapshot;
pub mod student;

pub use course::Course;
pub use enrollment::Enrollment;
pub use roster::Roster;
pub use snapshot::Snapshot;
pub use student::{Student, StudentFields};
