use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// One student's stored record. `grade` is opaque to the portal: the file
/// is populated out-of-band and may hold a letter grade or a number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub student_id: String,
    pub name: String,
    pub grade: serde_json::Value,
}

/// Student IDs are exactly 9 decimal digits.
pub fn validate_student_id(student_id: &str) -> Result<(), ModelError> {
    if student_id.len() != 9 || !student_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ModelError::Validation(
            "Please enter a valid 9-digit student ID.".into(),
        ));
    }
    Ok(())
}

/// Names are letters with optional interior spaces. The alphabetic check
/// ignores spaces; the 2..=10 length bound counts the trimmed input as
/// given, spaces included. Hangul and other Unicode letters are accepted.
pub fn validate_name(name: &str) -> Result<(), ModelError> {
    let letters_only = name.chars().all(|c| c == ' ' || c.is_alphabetic());
    let has_letter = name.chars().any(|c| c != ' ');
    let len = name.chars().count();
    if !letters_only || !has_letter || !(2..=10).contains(&len) {
        return Err(ModelError::Validation("Please enter a valid name.".into()));
    }
    Ok(())
}
