//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Coaching center students, courses and enrollments", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new center
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Display name of the center
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Manage students
    #[command(subcommand)]
    Student(StudentCommand),

    /// Manage courses
    #[command(subcommand)]
    Course(CourseCommand),

    /// Enroll a student in a course
    Enroll {
        /// Student id
        student_id: u32,

        /// Course name (case-insensitive)
        course: String,
    },

    /// List all enrollments
    Enrollments,

    /// Show students, courses and enrollments
    Overview,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum StudentCommand {
    /// Register a new student
    Add(StudentArgs),

    /// Replace every field of an existing student
    Update {
        /// Student id
        id: u32,

        #[command(flatten)]
        fields: StudentArgs,
    },

    /// Remove a student and their enrollments
    Remove {
        /// Student id
        id: u32,
    },

    /// List students
    List {
        /// Show every field
        #[arg(short, long)]
        details: bool,
    },
}

#[derive(Args, Debug)]
pub struct StudentArgs {
    #[arg(long)]
    pub name: String,

    /// Positive whole number
    #[arg(long)]
    pub age: String,

    #[arg(long)]
    pub contact: String,

    #[arg(long)]
    pub email: String,
}

#[derive(Subcommand, Debug)]
pub enum CourseCommand {
    /// Add a course
    Add {
        name: String,
    },

    /// Rename a course
    Rename {
        /// Current course name (case-insensitive)
        name: String,

        new_name: String,
    },

    /// Assign an instructor to a course
    Assign {
        /// Course name (case-insensitive)
        name: String,

        instructor: String,
    },

    /// Remove a course and its enrollments
    Remove {
        /// Course name (case-insensitive)
        name: String,
    },

    /// List courses
    List {
        /// Show instructors
        #[arg(short, long)]
        details: bool,
    },
}
