use crate::{CHECKLIST_JOURNAL_PROPERTY, Checklist};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded change in an issue's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueJournal {
    pub id: Uuid,
    pub issue_id: i64,

    /// None when the change was made anonymously
    pub user_id: Option<i64>,

    pub property: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl IssueJournal {
    /// Journal entry for a checklist item going from `before` to `after`.
    ///
    /// Returns None when the rendered item did not change.
    pub fn checklist_change(
        before: &Checklist,
        after: &Checklist,
        user_id: Option<i64>,
    ) -> Option<Self> {
        let old_value = before.journal_label();
        let new_value = after.journal_label();
        if old_value == new_value {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            issue_id: after.issue_id,
            user_id,
            property: CHECKLIST_JOURNAL_PROPERTY.to_string(),
            old_value: Some(old_value),
            new_value: Some(new_value),
            created_at: Utc::now(),
        })
    }
}
