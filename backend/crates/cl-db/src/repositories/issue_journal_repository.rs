use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use cl_core::IssueJournal;

use uuid::Uuid;

const TABLE: &str = "issue_journals";

#[derive(sqlx::FromRow)]
struct IssueJournalRow {
    id: String,
    issue_id: i64,
    user_id: Option<i64>,
    property: String,
    old_value: Option<String>,
    new_value: Option<String>,
    created_at: i64,
}

impl TryFrom<IssueJournalRow> for IssueJournal {
    type Error = DbError;

    fn try_from(r: IssueJournalRow) -> DbErrorResult<Self> {
        Ok(IssueJournal {
            id: Uuid::parse_str(&r.id)
                .map_err(|e| DbError::invalid_row(TABLE, format!("id: {e}")))?,
            issue_id: r.issue_id,
            user_id: r.user_id,
            property: r.property,
            old_value: r.old_value,
            new_value: r.new_value,
            created_at: timestamp(TABLE, r.created_at)?,
        })
    }
}

pub struct IssueJournalRepository;

impl IssueJournalRepository {
    pub async fn create<'e, E>(executor: E, journal: &IssueJournal) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = journal.id.to_string();
        let created_at = journal.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO issue_journals (
                  id, issue_id, user_id, property, old_value, new_value, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(id)
        .bind(journal.issue_id)
        .bind(journal.user_id)
        .bind(&journal.property)
        .bind(&journal.old_value)
        .bind(&journal.new_value)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Oldest first
    pub async fn find_by_issue<'e, E>(executor: E, issue_id: i64) -> DbErrorResult<Vec<IssueJournal>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, IssueJournalRow>(
            r#"
              SELECT id, issue_id, user_id, property, old_value, new_value, created_at
              FROM issue_journals
              WHERE issue_id = ?
              ORDER BY created_at ASC, rowid ASC
              "#,
        )
        .bind(issue_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(IssueJournal::try_from).collect()
    }
}
