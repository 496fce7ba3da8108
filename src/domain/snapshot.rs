//! Persisted form of the roster state

use super::{Course, Enrollment, Student};
use serde::{Deserialize, Serialize};

/// Current on-disk format. Bump when a field changes meaning.
pub const FORMAT_VERSION: u32 = 1;

/// Everything the data file holds: the three collections in insertion
/// order, then the student id counter.
///
/// Missing collections default to empty so that partial files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub enrollments: Vec<Enrollment>,
    #[serde(default = "default_next_student_id")]
    pub next_student_id: u32,
}

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

fn default_next_student_id() -> u32 {
    1
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot {
            format_version: FORMAT_VERSION,
            students: Vec::new(),
            courses: Vec::new(),
            enrollments: Vec::new(),
            next_student_id: 1,
        }
    }
}

impl Snapshot {
    /// Describe the first student id or course name (ignoring case) that
    /// repeats an earlier record, if any.
    pub fn repeated_key(&self) -> Option<String> {
        for (i, student) in self.students.iter().enumerate() {
            if self.students[..i].iter().any(|s| s.id == student.id) {
                return Some(format!("student id {} appears more than once", student.id));
            }
        }
        for (i, course) in self.courses.iter().enumerate() {
            if let Some(first) = self.courses[..i].iter().find(|c| c.matches(&course.name)) {
                return Some(format!("course '{}' repeats '{}'", course.name, first.name));
            }
        }
        None
    }
}
