//! Output formatting utilities

use crate::domain::{Course, Student};

/// Format students, one per line, as labels or with every field.
pub fn format_student_list(students: &[Student], details: bool) -> String {
    if students.is_empty() {
        return "No students registered".to_string();
    }

    let mut output = String::new();
    for student in students {
        let line = if details {
            student.details()
        } else {
            student.label()
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

pub fn format_course_list(courses: &[Course], details: bool) -> String {
    if courses.is_empty() {
        return "No courses added".to_string();
    }

    let mut output = String::new();
    for course in courses {
        let line = if details {
            course.details()
        } else {
            course.label()
        };
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Format already-resolved enrollment labels.
pub fn format_enrollment_list(labels: &[String]) -> String {
    if labels.is_empty() {
        return "No enrollments yet".to_string();
    }

    let mut output = String::new();
    for label in labels {
        output.push_str(&format!("{}\n", label));
    }
    output
}
