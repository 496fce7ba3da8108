//! Enrollment relation

use super::course::same_course_name;
use serde::{Deserialize, Serialize};

/// Links one student to one course. Holds the student's id and the course's
/// name rather than the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: u32,
    pub course_name: String,
}

impl Enrollment {
    pub fn new(student_id: u32, course_name: impl Into<String>) -> Self {
        Enrollment {
            student_id,
            course_name: course_name.into(),
        }
    }

    pub fn is_for_course(&self, course_name: &str) -> bool {
        same_course_name(&self.course_name, course_name)
    }

    pub fn is_pair(&self, student_id: u32, course_name: &str) -> bool {
        self.student_id == student_id && self.is_for_course(course_name)
    }

    /// The enrollment carries only the student id, so the caller resolves
    /// the name.
    pub fn label(&self, student_name: &str) -> String {
        format!("{} enrolled in {}", student_name, self.course_name)
    }
}
