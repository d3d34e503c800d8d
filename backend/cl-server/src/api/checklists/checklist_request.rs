use cl_core::ChecklistAttributes;

use serde::Deserialize;

/// Body of create and update: `{"checklist": {...}}`.
///
/// A missing `checklist` object is treated as an empty attribute set so that
/// validation, not parsing, reports the blank subject.
#[derive(Debug, Default, Deserialize)]
pub struct ChecklistRequest {
    #[serde(default)]
    pub checklist: ChecklistAttributes,
}
