use crate::ChecklistDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChecklistListResponse {
    pub checklists: Vec<ChecklistDto>,
    pub total_count: usize,
}
