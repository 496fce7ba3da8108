//! roster - Coaching center records
//!
//! Keeps students, courses and enrollments for a small coaching center in a
//! single data file, enforcing the relations between them on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RosterError;
