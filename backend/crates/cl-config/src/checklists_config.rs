use crate::DEFAULT_CHECKLISTS_ISSUE_DONE_RATIO;

use serde::Deserialize;

/// Checklist plugin options
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChecklistsConfig {
    /// Let checklist progress drive the issue's done ratio
    pub issue_done_ratio: bool,
}

impl Default for ChecklistsConfig {
    fn default() -> Self {
        Self {
            issue_done_ratio: DEFAULT_CHECKLISTS_ISSUE_DONE_RATIO,
        }
    }
}
