use crate::{ApiResult, AppState};

use cl_core::checklist_done_ratio;
use cl_db::{ChecklistRepository, IssueRepository};

/// Write the checklist-derived done ratio onto the issue.
///
/// No-op unless the tracker takes done ratios from the issue field and the
/// checklist toggle is on. Issues with no countable items keep their ratio.
/// Returns the ratio written, if any.
pub async fn recalculate_issue_ratio(state: &AppState, issue_id: i64) -> ApiResult<Option<i32>> {
    if !state.config.recalculates_done_ratio() {
        return Ok(None);
    }

    let items = ChecklistRepository::find_by_issue(&state.pool, issue_id).await?;
    let Some(ratio) = checklist_done_ratio(&items) else {
        return Ok(None);
    };

    IssueRepository::update_done_ratio(&state.pool, issue_id, ratio).await?;
    state.metrics.done_ratio_recalculated();
    log::debug!("Issue {} done ratio set to {}%", issue_id, ratio);

    Ok(Some(ratio))
}
