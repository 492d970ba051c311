//! Input validation for complaint filing, follow-ups and admin responses

use thiserror::Error;

use crate::models::{NewComplaint, Status};

pub const MAX_TITLE_LEN: usize = 120;
pub const MAX_TEXT_LEN: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' is required")]
    Required { field: &'static str },

    #[error("Field '{field}' is too long (max {max} characters)")]
    TooLong { field: &'static str, max: usize },

    #[error("Status cannot move back from {from} to {to}")]
    BackwardTransition { from: Status, to: Status },

    #[error("Complaint is resolved and no longer accepts follow-ups")]
    Closed,
}

fn check_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Validate a complaint filing request
pub fn validate_new_complaint(input: &NewComplaint) -> Result<(), ValidationError> {
    check_text("title", &input.title, MAX_TITLE_LEN)?;
    check_text("description", &input.description, MAX_TEXT_LEN)?;
    Ok(())
}

/// Validate an admin response. Status may stay put or move forward.
pub fn validate_response(from: Status, to: Status, message: &str) -> Result<(), ValidationError> {
    if to < from {
        return Err(ValidationError::BackwardTransition { from, to });
    }
    check_text("response", message, MAX_TEXT_LEN)
}

pub fn validate_follow_up(status: Status, message: &str) -> Result<(), ValidationError> {
    if status == Status::Resolved {
        return Err(ValidationError::Closed);
    }
    check_text("message", message, MAX_TEXT_LEN)
}
