mod models;

use crate::Checklist;

use chrono::Utc;

pub(crate) fn checklist(id: i64, subject: &str, is_done: bool) -> Checklist {
    let now = Utc::now();
    Checklist {
        id,
        issue_id: 42,
        subject: subject.to_string(),
        is_done,
        is_section: false,
        position: id as i32,
        created_at: now,
        updated_at: now,
    }
}
