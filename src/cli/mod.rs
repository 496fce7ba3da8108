//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{Cli, Commands, CourseCommand, StudentArgs, StudentCommand};
pub use output::{format_course_list, format_enrollment_list, format_student_list};
