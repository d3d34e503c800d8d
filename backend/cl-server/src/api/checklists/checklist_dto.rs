use cl_core::Checklist;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChecklistDto {
    pub id: i64,
    pub issue_id: i64,
    pub subject: String,
    pub is_done: bool,
    pub is_section: bool,
    pub position: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Checklist> for ChecklistDto {
    fn from(c: Checklist) -> Self {
        Self {
            id: c.id,
            issue_id: c.issue_id,
            subject: c.subject,
            is_done: c.is_done,
            is_section: c.is_section,
            position: c.position,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}
