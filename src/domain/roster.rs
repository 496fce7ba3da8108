//! In-memory store of students, courses and enrollments
//!
//! `Roster` owns every record and is the only place that mutates them, so
//! the relational rules live here:
//! - student ids are unique and assigned from a counter that never goes
//!   backwards within a session
//! - course names are unique ignoring case
//! - an enrollment always points at an existing student and course, and a
//!   (student, course) pair appears at most once
//!
//! A rejected call leaves the roster untouched. Not thread-safe; wrap it in
//! a single lock together with the store if it is ever shared.

use super::{Course, Enrollment, Snapshot, Student, StudentFields};
use crate::error::{Result, RosterError};
use log::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    next_student_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Roster {
            students: Vec::new(),
            courses: Vec::new(),
            enrollments: Vec::new(),
            next_student_id: 1,
        }
    }

    /// Rebuild a roster from persisted state.
    ///
    /// The stored counter is ignored and recomputed from the student ids.
    /// A student whose id or a course whose name (ignoring case) repeats an
    /// earlier record is dropped, as is any enrollment that points at a
    /// missing student or course or repeats an earlier pair.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot {
            students,
            courses,
            enrollments,
            ..
        } = snapshot;

        let mut roster = Roster {
            next_student_id: next_id_after(&students),
            students: Vec::with_capacity(students.len()),
            courses: Vec::with_capacity(courses.len()),
            enrollments: Vec::with_capacity(enrollments.len()),
        };

        for student in students {
            if roster.student(student.id).is_some() {
                warn!("Dropping student '{}' reusing id {}", student.name, student.id);
                continue;
            }
            roster.students.push(student);
        }

        for course in courses {
            if let Some(existing) = roster.course(&course.name) {
                warn!("Dropping course '{}' clashing with '{}'", course.name, existing.name);
                continue;
            }
            roster.courses.push(course);
        }

        for enrollment in enrollments {
            let Some(course) = roster.course(&enrollment.course_name) else {
                warn!(
                    "Dropping enrollment of student {} in unknown course '{}'",
                    enrollment.student_id, enrollment.course_name
                );
                continue;
            };
            let course_name = course.name.clone();
            if roster.student(enrollment.student_id).is_none() {
                warn!(
                    "Dropping enrollment of unknown student {} in '{}'",
                    enrollment.student_id, course_name
                );
                continue;
            }
            if roster.is_enrolled(enrollment.student_id, &course_name) {
                warn!(
                    "Dropping duplicate enrollment of student {} in '{}'",
                    enrollment.student_id, course_name
                );
                continue;
            }
            roster
                .enrollments
                .push(Enrollment::new(enrollment.student_id, course_name));
        }

        roster
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.students.clone(),
            courses: self.courses.clone(),
            enrollments: self.enrollments.clone(),
            next_student_id: self.next_student_id,
            ..Snapshot::default()
        }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// The id the next added student will receive
    pub fn next_student_id(&self) -> u32 {
        self.next_student_id
    }

    pub fn student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Look up a course by name, ignoring case
    pub fn course(&self, handle: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.matches(handle))
    }

    pub fn is_enrolled(&self, student_id: u32, course_name: &str) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.is_pair(student_id, course_name))
    }

    /// `"{student} enrolled in {course}"`, resolving the student's current
    /// name. `None` only if the enrollment does not belong to this roster.
    pub fn enrollment_label(&self, enrollment: &Enrollment) -> Option<String> {
        self.student(enrollment.student_id)
            .map(|s| enrollment.label(&s.name))
    }

    pub fn enrollment_labels(&self) -> Vec<String> {
        self.enrollments
            .iter()
            .filter_map(|e| self.enrollment_label(e))
            .collect()
    }

    pub fn add_student(&mut self, fields: StudentFields) -> Result<&Student> {
        validate_student(&fields)?;

        let id = self.next_student_id;
        self.next_student_id = id
            .checked_add(1)
            .ok_or_else(|| RosterError::Validation("student id space exhausted".to_string()))?;

        debug!("Adding student {} ({})", id, fields.name);
        let index = self.students.len();
        self.students.push(Student::new(id, fields));
        Ok(&self.students[index])
    }

    pub fn update_student(&mut self, id: u32, fields: StudentFields) -> Result<&Student> {
        let index = self
            .student_index(id)
            .ok_or(RosterError::StudentNotFound(id))?;
        validate_student(&fields)?;

        debug!("Updating student {}", id);
        self.students[index].apply(fields);
        Ok(&self.students[index])
    }

    /// Remove a student together with all of their enrollments.
    pub fn remove_student(&mut self, id: u32) -> Result<Student> {
        let index = self
            .student_index(id)
            .ok_or(RosterError::StudentNotFound(id))?;

        let before = self.enrollments.len();
        self.enrollments.retain(|e| e.student_id != id);
        debug!(
            "Removing student {} and {} enrollment(s)",
            id,
            before - self.enrollments.len()
        );

        Ok(self.students.remove(index))
    }

    pub fn add_course(&mut self, name: &str) -> Result<&Course> {
        require("course name", name)?;
        if let Some(existing) = self.course(name) {
            return Err(RosterError::DuplicateCourse(existing.name.clone()));
        }

        debug!("Adding course '{}'", name);
        let index = self.courses.len();
        self.courses.push(Course::new(name));
        Ok(&self.courses[index])
    }

    /// Rename a course. Enrollments follow the course to its new name.
    pub fn update_course(&mut self, handle: &str, new_name: &str) -> Result<&Course> {
        let index = self
            .course_index(handle)
            .ok_or_else(|| RosterError::CourseNotFound(handle.to_string()))?;
        require("course name", new_name)?;

        let clash = self
            .courses
            .iter()
            .enumerate()
            .find(|(i, c)| *i != index && c.matches(new_name));
        if let Some((_, other)) = clash {
            return Err(RosterError::DuplicateCourse(other.name.clone()));
        }

        let old_name = std::mem::replace(&mut self.courses[index].name, new_name.to_string());
        debug!("Renaming course '{}' to '{}'", old_name, new_name);
        for enrollment in self
            .enrollments
            .iter_mut()
            .filter(|e| e.is_for_course(&old_name))
        {
            enrollment.course_name = new_name.to_string();
        }

        Ok(&self.courses[index])
    }

    pub fn assign_instructor(&mut self, handle: &str, instructor: &str) -> Result<&Course> {
        let index = self
            .course_index(handle)
            .ok_or_else(|| RosterError::CourseNotFound(handle.to_string()))?;
        require("instructor name", instructor)?;

        debug!(
            "Assigning '{}' to course '{}'",
            instructor, self.courses[index].name
        );
        self.courses[index].instructor = Some(instructor.to_string());
        Ok(&self.courses[index])
    }

    /// Remove a course and exactly the enrollments that reference it.
    pub fn remove_course(&mut self, handle: &str) -> Result<Course> {
        let index = self
            .course_index(handle)
            .ok_or_else(|| RosterError::CourseNotFound(handle.to_string()))?;

        let course = self.courses.remove(index);
        let before = self.enrollments.len();
        self.enrollments.retain(|e| !e.is_for_course(&course.name));
        debug!(
            "Removed course '{}' and {} enrollment(s)",
            course.name,
            before - self.enrollments.len()
        );

        Ok(course)
    }

    pub fn enroll(&mut self, student_id: u32, course_handle: &str) -> Result<&Enrollment> {
        if self.student(student_id).is_none() {
            return Err(RosterError::StudentNotFound(student_id));
        }
        let course_name = self
            .course(course_handle)
            .map(|c| c.name.clone())
            .ok_or_else(|| RosterError::CourseNotFound(course_handle.to_string()))?;

        if self.is_enrolled(student_id, &course_name) {
            return Err(RosterError::AlreadyEnrolled {
                student_id,
                course: course_name,
            });
        }

        debug!("Enrolling student {} in '{}'", student_id, course_name);
        let index = self.enrollments.len();
        self.enrollments.push(Enrollment::new(student_id, course_name));
        Ok(&self.enrollments[index])
    }

    fn student_index(&self, id: u32) -> Option<usize> {
        self.students.iter().position(|s| s.id == id)
    }

    fn course_index(&self, handle: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.matches(handle))
    }
}

fn next_id_after(students: &[Student]) -> u32 {
    students
        .iter()
        .map(|s| s.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

fn validate_student(fields: &StudentFields) -> Result<()> {
    require("name", &fields.name)?;
    require("contact number", &fields.contact_number)?;
    require("email", &fields.email)?;
    if fields.age == 0 {
        return Err(RosterError::Validation(
            "age must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn fields(name: &str) -> StudentFields {
        StudentFields::new(name, 20, "555", format!("{}@x.com", name.to_lowercase()))
    }

    fn roster_with(names: &[&str], courses: &[&str]) -> Roster {
        let mut roster = Roster::new();
        for name in names {
            roster.add_student(fields(name)).unwrap();
        }
        for course in courses {
            roster.add_course(course).unwrap();
        }
        roster
    }

    #[test]
    fn test_first_student_gets_id_one() {
        let mut roster = Roster::new();
        let student = roster
            .add_student(StudentFields::new("Alice", 20, "555", "a@x.com"))
            .unwrap();
        assert_eq!(student.id, 1);
        assert_eq!(student.name, "Alice");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut roster = Roster::new();
        let mut last = 0;
        for name in ["A", "B", "C", "D"] {
            let id = roster.add_student(fields(name)).unwrap().id;
            assert!(id > last);
            last = id;
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn test_ids_not_reused_after_removal_in_session() {
        let mut roster = roster_with(&["A", "B"], &[]);
        roster.remove_student(2).unwrap();
        let id = roster.add_student(fields("C")).unwrap().id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_add_student_rejects_zero_age() {
        let mut roster = Roster::new();
        let err = roster
            .add_student(StudentFields::new("Alice", 0, "555", "a@x.com"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(roster.students().is_empty());
        assert_eq!(roster.next_student_id(), 1);
    }

    #[test]
    fn test_add_student_rejects_blank_fields() {
        let mut roster = Roster::new();
        let err = roster
            .add_student(StudentFields::new("  ", 20, "555", "a@x.com"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        let err = roster
            .add_student(StudentFields::new("Alice", 20, "555", ""))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(roster.students().is_empty());
    }

    #[test]
    fn test_update_student_overwrites_fields() {
        let mut roster = roster_with(&["Alice"], &[]);
        roster
            .update_student(1, StudentFields::new("Alicia", 22, "777", "al@x.com"))
            .unwrap();
        let student = roster.student(1).unwrap();
        assert_eq!(
            student.details(),
            "ID: 1, Name: Alicia, Age: 22, Contact: 777, Email: al@x.com"
        );
    }

    #[test]
    fn test_update_unknown_student() {
        let mut roster = Roster::new();
        let err = roster.update_student(9, fields("X")).unwrap_err();
        assert!(matches!(err, RosterError::StudentNotFound(9)));
    }

    #[test]
    fn test_update_student_invalid_leaves_state() {
        let mut roster = roster_with(&["Alice"], &[]);
        let before = roster.clone();
        let err = roster
            .update_student(1, StudentFields::new("Alice", 0, "555", "a@x.com"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_student_cascades() {
        let mut roster = roster_with(&["Alice", "Bob"], &["Physics", "Chem"]);
        roster.enroll(1, "Physics").unwrap();
        roster.enroll(1, "Chem").unwrap();
        roster.enroll(2, "Physics").unwrap();

        let removed = roster.remove_student(1).unwrap();
        assert_eq!(removed.name, "Alice");
        assert!(roster.enrollments().iter().all(|e| e.student_id != 1));
        assert_eq!(roster.enrollments().len(), 1);
        assert_eq!(roster.enrollment_labels(), vec!["Bob enrolled in Physics"]);
    }

    #[test]
    fn test_remove_unknown_student() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.remove_student(1),
            Err(RosterError::StudentNotFound(1))
        ));
    }

    #[test]
    fn test_course_names_unique_ignoring_case() {
        let mut roster = Roster::new();
        roster.add_course("Math").unwrap();
        let err = roster.add_course("math").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(roster.courses().len(), 1);
    }

    #[test]
    fn test_duplicate_course_same_spelling() {
        let mut roster = Roster::new();
        roster.add_course("Chem").unwrap();
        let err = roster.add_course("Chem").unwrap_err();
        assert!(matches!(err, RosterError::DuplicateCourse(ref n) if n == "Chem"));
        assert_eq!(roster.courses().len(), 1);
    }

    #[test]
    fn test_add_course_rejects_empty() {
        let mut roster = Roster::new();
        let err = roster.add_course("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_update_course_conflict_excludes_self() {
        let mut roster = roster_with(&[], &["Math", "Physics"]);
        roster.update_course("math", "MATH").unwrap();
        assert_eq!(roster.courses()[0].name, "MATH");

        let err = roster.update_course("MATH", "physics").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(roster.courses()[0].name, "MATH");
    }

    #[test]
    fn test_update_unknown_course() {
        let mut roster = Roster::new();
        let err = roster.update_course("Math", "Algebra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_rename_carries_enrollments() {
        let mut roster = roster_with(&["Alice"], &["Physics"]);
        roster.enroll(1, "Physics").unwrap();
        roster.update_course("physics", "Mechanics").unwrap();

        assert_eq!(roster.enrollments()[0].course_name, "Mechanics");
        assert_eq!(roster.enrollment_labels(), vec!["Alice enrolled in Mechanics"]);

        roster.remove_course("Mechanics").unwrap();
        assert!(roster.enrollments().is_empty());
    }

    #[test]
    fn test_assign_instructor() {
        let mut roster = roster_with(&[], &["Physics"]);
        roster.assign_instructor("PHYSICS", "Dr. Curie").unwrap();
        assert_eq!(
            roster.course("physics").unwrap().details(),
            "Course: Physics, Instructor: Dr. Curie"
        );

        roster.assign_instructor("Physics", "Dr. Bohr").unwrap();
        assert_eq!(
            roster.courses()[0].instructor.as_deref(),
            Some("Dr. Bohr")
        );
    }

    #[test]
    fn test_assign_instructor_errors() {
        let mut roster = roster_with(&[], &["Physics"]);
        assert_eq!(
            roster.assign_instructor("Chem", "X").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            roster.assign_instructor("Physics", " ").unwrap_err().kind(),
            ErrorKind::Validation
        );
        assert!(roster.courses()[0].instructor.is_none());
    }

    #[test]
    fn test_remove_course_removes_only_matching_enrollments() {
        let mut roster = roster_with(&["Alice", "Bob"], &["Physics", "Chem"]);
        roster.enroll(1, "Physics").unwrap();
        roster.enroll(2, "Chem").unwrap();
        roster.enroll(2, "physics").unwrap();

        let removed = roster.remove_course("PHYSICS").unwrap();
        assert_eq!(removed.name, "Physics");
        assert_eq!(roster.enrollments(), &[Enrollment::new(2, "Chem")]);
        assert_eq!(roster.courses().len(), 1);
    }

    #[test]
    fn test_remove_unknown_course() {
        let mut roster = Roster::new();
        assert_eq!(
            roster.remove_course("Physics").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_enroll_twice_conflicts() {
        let mut roster = roster_with(&["Alice"], &["Physics"]);
        roster.enroll(1, "Physics").unwrap();
        let err = roster.enroll(1, "physics").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(roster.enrollments().len(), 1);
    }

    #[test]
    fn test_enroll_uses_canonical_course_name() {
        let mut roster = roster_with(&["Alice"], &["Physics"]);
        let enrollment = roster.enroll(1, "pHySiCs").unwrap();
        assert_eq!(enrollment.course_name, "Physics");
    }

    #[test]
    fn test_enroll_unknown_sides() {
        let mut roster = roster_with(&["Alice"], &["Physics"]);
        assert!(matches!(
            roster.enroll(2, "Physics"),
            Err(RosterError::StudentNotFound(2))
        ));
        assert!(matches!(
            roster.enroll(1, "Chem"),
            Err(RosterError::CourseNotFound(_))
        ));
        assert!(roster.enrollments().is_empty());
    }

    #[test]
    fn test_scenario_enroll_then_remove_student() {
        let mut roster = Roster::new();
        let id = roster
            .add_student(StudentFields::new("Alice", 20, "555", "a@x.com"))
            .unwrap()
            .id;
        assert_eq!(id, 1);
        roster.add_course("Physics").unwrap();
        roster.enroll(1, "Physics").unwrap();
        assert_eq!(roster.enrollment_labels(), vec!["Alice enrolled in Physics"]);

        roster.remove_student(1).unwrap();
        assert!(roster.enrollment_labels().is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut roster = roster_with(&["Alice", "Bob"], &["Physics"]);
        roster.assign_instructor("Physics", "Dr. Curie").unwrap();
        roster.enroll(2, "Physics").unwrap();

        let restored = Roster::from_snapshot(roster.to_snapshot());
        assert_eq!(restored, roster);
    }

    #[test]
    fn test_from_snapshot_recomputes_counter() {
        let snapshot = Snapshot {
            students: vec![
                Student::new(4, fields("A")),
                Student::new(2, fields("B")),
            ],
            next_student_id: 1,
            ..Snapshot::default()
        };
        let roster = Roster::from_snapshot(snapshot);
        assert_eq!(roster.next_student_id(), 5);

        let empty = Roster::from_snapshot(Snapshot {
            next_student_id: 40,
            ..Snapshot::default()
        });
        assert_eq!(empty.next_student_id(), 1);
    }

    #[test]
    fn test_from_snapshot_drops_dangling_enrollments() {
        let snapshot = Snapshot {
            students: vec![Student::new(1, fields("Alice"))],
            courses: vec![Course::new("Physics")],
            enrollments: vec![
                Enrollment::new(1, "physics"),
                Enrollment::new(1, "Physics"),
                Enrollment::new(2, "Physics"),
                Enrollment::new(1, "Chem"),
            ],
            ..Snapshot::default()
        };
        let roster = Roster::from_snapshot(snapshot);
        assert_eq!(roster.enrollments(), &[Enrollment::new(1, "Physics")]);
    }

    #[test]
    fn test_from_snapshot_keeps_first_of_repeated_keys() {
        let snapshot = Snapshot {
            students: vec![
                Student::new(1, fields("Alice")),
                Student::new(1, fields("Bob")),
            ],
            courses: vec![Course::new("Math"), Course::new("math")],
            enrollments: vec![Enrollment::new(1, "math")],
            ..Snapshot::default()
        };
        let mut roster = Roster::from_snapshot(snapshot);

        assert_eq!(roster.students().len(), 1);
        assert_eq!(roster.students()[0].name, "Alice");
        assert_eq!(roster.courses(), &[Course::new("Math")]);
        assert_eq!(roster.enrollment_labels(), vec!["Alice enrolled in Math"]);

        roster.update_course("math", "Algebra").unwrap();
        roster.remove_student(1).unwrap();
        assert!(roster.students().is_empty());
        assert_eq!(roster.courses(), &[Course::new("Algebra")]);
        assert!(roster.enrollments().is_empty());
    }
}
