use crate::ApiResult;

use cl_core::{Checklist, IssueJournal};
use cl_db::{ChecklistRepository, IssueJournalRepository};

use sqlx::SqlitePool;

/// Save an edited item and record the change on its issue.
///
/// `before` is the item as loaded. Validation runs first so an invalid item
/// touches neither table. The save and the journal row commit together, and
/// no row is written when the item renders the same as before.
pub async fn with_issue_journal(
    pool: &SqlitePool,
    before: &Checklist,
    item: &Checklist,
    user_id: Option<i64>,
) -> ApiResult<()> {
    item.validate()?;

    let mut tx = pool.begin().await?;

    ChecklistRepository::update(&mut *tx, item).await?;

    if let Some(journal) = IssueJournal::checklist_change(before, item, user_id) {
        IssueJournalRepository::create(&mut *tx, &journal).await?;
    }

    tx.commit().await?;

    Ok(())
}
