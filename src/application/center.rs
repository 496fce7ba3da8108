//! Center records use case
//!
//! Pairs the in-memory roster with a store and saves after every change.

use crate::domain::{overview, Course, Enrollment, Roster, Student, StudentFields};
use crate::error::Result;
use crate::infrastructure::{FileStore, FileSystemWorkspace, RosterStore, Workspace};
use log::warn;

/// Service for reading and changing a center's records
pub struct CenterService<S: RosterStore> {
    roster: Roster,
    store: S,
}

impl CenterService<FileStore> {
    /// Open the data file configured for a workspace
    pub fn open_workspace(workspace: &FileSystemWorkspace) -> Result<Self> {
        let config = workspace.load_config()?;
        Self::open(FileStore::new(workspace.data_path(&config)))
    }
}

impl<S: RosterStore> CenterService<S> {
    /// Load the store's current state
    pub fn open(store: S) -> Result<Self> {
        let snapshot = store.load()?;
        Ok(CenterService {
            roster: Roster::from_snapshot(snapshot),
            store,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn overview(&self) -> String {
        overview::render(&self.roster)
    }

    /// Write the current state to the store.
    ///
    /// Mutations call this themselves; callers only need it to retry after
    /// a failed save.
    pub fn save(&self) -> Result<()> {
        self.store.save(&self.roster.to_snapshot())
    }

    // A failed save keeps the in-memory change; the error still reaches the
    // caller so it can retry `save`.
    fn persist(&self) -> Result<()> {
        self.save().inspect_err(|e| {
            warn!("Change kept in memory but not saved: {}", e);
        })
    }

    pub fn add_student(&mut self, fields: StudentFields) -> Result<Student> {
        let student = self.roster.add_student(fields)?.clone();
        self.persist()?;
        Ok(student)
    }

    pub fn update_student(&mut self, id: u32, fields: StudentFields) -> Result<Student> {
        let student = self.roster.update_student(id, fields)?.clone();
        self.persist()?;
        Ok(student)
    }

    pub fn remove_student(&mut self, id: u32) -> Result<Student> {
        let student = self.roster.remove_student(id)?;
        self.persist()?;
        Ok(student)
    }

    pub fn add_course(&mut self, name: &str) -> Result<Course> {
        let course = self.roster.add_course(name)?.clone();
        self.persist()?;
        Ok(course)
    }

    pub fn update_course(&mut self, handle: &str, new_name: &str) -> Result<Course> {
        let course = self.roster.update_course(handle, new_name)?.clone();
        self.persist()?;
        Ok(course)
    }

    pub fn assign_instructor(&mut self, handle: &str, instructor: &str) -> Result<Course> {
        let course = self.roster.assign_instructor(handle, instructor)?.clone();
        self.persist()?;
        Ok(course)
    }

    pub fn remove_course(&mut self, handle: &str) -> Result<Course> {
        let course = self.roster.remove_course(handle)?;
        self.persist()?;
        Ok(course)
    }

    pub fn enroll(&mut self, student_id: u32, course_handle: &str) -> Result<Enrollment> {
        let enrollment = self.roster.enroll(student_id, course_handle)?.clone();
        self.persist()?;
        Ok(enrollment)
    }
}
