//! Turning raw command-line text into validated field values

use crate::cli::StudentArgs;
use crate::domain::StudentFields;
use crate::error::{Result, RosterError};

/// Trim a required text field, rejecting blank input.
pub fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Parse an age typed by the user; must be a whole number above zero.
pub fn parse_age(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(RosterError::Validation(format!(
            "age must be a positive integer, got '{}'",
            value.trim()
        ))),
    }
}

pub fn student_fields(args: &StudentArgs) -> Result<StudentFields> {
    Ok(StudentFields::new(
        required("name", &args.name)?,
        parse_age(&args.age)?,
        required("contact number", &args.contact)?,
        required("email", &args.email)?,
    ))
}
