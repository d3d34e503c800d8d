//! Resolve path identifiers to records, 404 when they don't

use crate::{ApiError, ApiResult};

use cl_core::{Checklist, Issue};
use cl_db::{ChecklistRepository, IssueRepository};

use sqlx::SqlitePool;

fn parse_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

pub async fn find_issue_by_id(pool: &SqlitePool, issue_id: &str) -> ApiResult<Issue> {
    let Some(id) = parse_id(issue_id) else {
        return Err(ApiError::not_found(format!("Issue {} not found", issue_id)));
    };

    IssueRepository::find_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", issue_id)))
}

/// The item together with the issue that owns it
pub async fn find_checklist_item(pool: &SqlitePool, id: &str) -> ApiResult<(Checklist, Issue)> {
    let Some(item_id) = parse_id(id) else {
        return Err(ApiError::not_found(format!("Checklist {} not found", id)));
    };

    let item = ChecklistRepository::find_by_id(pool, item_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Checklist {} not found", id)))?;

    let issue = IssueRepository::find_by_id(pool, item.issue_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Issue {} not found", item.issue_id)))?;

    Ok((item, issue))
}
