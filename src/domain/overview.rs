//! Plain-text summary of the whole roster

use super::Roster;

/// Render students, courses and enrollments as three labelled sections.
///
/// Pure: recomputed from the roster on every call.
pub fn render(roster: &Roster) -> String {
    let mut out = String::new();

    out.push_str("=== STUDENTS ===\n");
    if roster.students().is_empty() {
        out.push_str("No students registered.\n");
    }
    for student in roster.students() {
        out.push_str(&student.details());
        out.push('\n');
    }

    out.push_str("\n=== COURSES ===\n");
    if roster.courses().is_empty() {
        out.push_str("No courses added.\n");
    }
    for course in roster.courses() {
        out.push_str(&course.details());
        out.push('\n');
    }

    out.push_str("\n=== ENROLLMENTS ===\n");
    let labels = roster.enrollment_labels();
    if labels.is_empty() {
        out.push_str("No enrollments yet.\n");
    }
    for label in labels {
        out.push_str(&label);
        out.push('\n');
    }

    out
}
