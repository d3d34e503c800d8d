//! Field-level validation errors for checklist items

use crate::{CoreError, MAX_SUBJECT_LENGTH, MIN_POSITION, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors collected while validating one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    /// Ok when nothing was collected, otherwise a `CoreError::Validation`
    #[track_caller]
    pub fn into_result(self) -> CoreErrorResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation {
                errors: self,
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| format!("{} {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

pub(crate) fn validate_subject(subject: &str, errors: &mut ValidationErrors) {
    if subject.trim().is_empty() {
        errors.add("subject", "cannot be blank");
    } else if subject.chars().count() > MAX_SUBJECT_LENGTH {
        errors.add(
            "subject",
            format!("is too long (maximum is {MAX_SUBJECT_LENGTH} characters)"),
        );
    }
}

pub(crate) fn validate_position(position: i32, errors: &mut ValidationErrors) {
    if position < MIN_POSITION {
        errors.add(
            "position",
            format!("must be greater than or equal to {MIN_POSITION}"),
        );
    }
}
