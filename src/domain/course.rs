//! Course records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A course offered by the center. Its name is the course's identity and is
/// compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Course {
            name: name.into(),
            instructor: None,
        }
    }

    /// True when `handle` names this course, ignoring case
    pub fn matches(&self, handle: &str) -> bool {
        same_course_name(&self.name, handle)
    }

    pub fn label(&self) -> String {
        self.name.clone()
    }

    pub fn details(&self) -> String {
        match &self.instructor {
            Some(instructor) => format!("Course: {}, Instructor: {}", self.name, instructor),
            None => format!("Course: {}, No instructor assigned", self.name),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Course names are unique without regard to case.
pub fn same_course_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
