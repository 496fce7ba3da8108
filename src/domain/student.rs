//! Student records

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered student. The id is assigned by the roster and never reused
/// within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub contact_number: String,
    pub email: String,
}

/// Field values supplied when adding or updating a student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFields {
    pub name: String,
    pub age: u32,
    pub contact_number: String,
    pub email: String,
}

impl StudentFields {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        contact_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        StudentFields {
            name: name.into(),
            age,
            contact_number: contact_number.into(),
            email: email.into(),
        }
    }
}

impl Student {
    pub fn new(id: u32, fields: StudentFields) -> Self {
        Student {
            id,
            name: fields.name,
            age: fields.age,
            contact_number: fields.contact_number,
            email: fields.email,
        }
    }

    /// Overwrite every mutable field, keeping the id.
    pub fn apply(&mut self, fields: StudentFields) {
        self.name = fields.name;
        self.age = fields.age;
        self.contact_number = fields.contact_number;
        self.email = fields.email;
    }

    /// Short form used in pickers and lists, e.g. `3: Alice`
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.name)
    }

    pub fn details(&self) -> String {
        format!(
            "ID: {}, Name: {}, Age: {}, Contact: {}, Email: {}",
            self.id, self.name, self.age, self.contact_number, self.email
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
