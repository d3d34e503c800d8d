use crate::ChecklistDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChecklistResponse {
    pub checklist: ChecklistDto,
}
