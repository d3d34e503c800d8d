use serde::Deserialize;

/// Client-assignable checklist fields.
///
/// Anything not listed here (`id`, `issue_id`, timestamps) is dropped while
/// deserializing, so a payload can never move an item to another issue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChecklistAttributes {
    pub subject: Option<String>,
    pub is_done: Option<bool>,
    pub is_section: Option<bool>,
    pub position: Option<i32>,
}
