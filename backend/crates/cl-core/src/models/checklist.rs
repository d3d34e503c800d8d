use crate::validation::{validate_position, validate_subject};
use crate::{ChecklistAttributes, Result as CoreErrorResult, ValidationErrors};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single line of an issue's checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checklist {
    pub id: i64,
    pub issue_id: i64,

    pub subject: String,
    pub is_done: bool,
    /// Section headers group items and are never ticked off
    pub is_section: bool,
    pub position: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Checklist {
    /// Assign the whitelisted attributes that are present, leaving the rest untouched.
    pub fn apply_attributes(&mut self, attributes: ChecklistAttributes) {
        if let Some(subject) = attributes.subject {
            self.subject = subject;
        }
        if let Some(is_done) = attributes.is_done {
            self.is_done = is_done;
        }
        if let Some(is_section) = attributes.is_section {
            self.is_section = is_section;
        }
        if let Some(position) = attributes.position {
            self.position = position;
        }
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        let mut errors = ValidationErrors::new();
        validate_subject(&self.subject, &mut errors);
        validate_position(self.position, &mut errors);
        errors.into_result()
    }

    /// One-line rendering used in issue journals, e.g. `[x] Write tests`
    pub fn journal_label(&self) -> String {
        let mark = if self.is_done { 'x' } else { ' ' };
        format!("[{mark}] {}", self.subject)
    }
}

/// An item that has not been persisted yet.
///
/// `position` stays `None` until storage appends the item to the end of its issue's list.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChecklist {
    pub issue_id: i64,
    pub subject: String,
    pub is_done: bool,
    pub is_section: bool,
    pub position: Option<i32>,
}

impl NewChecklist {
    /// Build from a client payload. The owning issue always comes from the caller.
    pub fn from_attributes(issue_id: i64, attributes: ChecklistAttributes) -> Self {
        Self {
            issue_id,
            subject: attributes.subject.unwrap_or_default(),
            is_done: attributes.is_done.unwrap_or(false),
            is_section: attributes.is_section.unwrap_or(false),
            position: attributes.position,
        }
    }

    pub fn validate(&self) -> CoreErrorResult<()> {
        let mut errors = ValidationErrors::new();
        validate_subject(&self.subject, &mut errors);
        if let Some(position) = self.position {
            validate_position(position, &mut errors);
        }
        errors.into_result()
    }
}
