use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use cl_core::{Checklist, NewChecklist};

use chrono::Utc;

const TABLE: &str = "checklists";

#[derive(sqlx::FromRow)]
struct ChecklistRow {
    id: i64,
    issue_id: i64,
    subject: String,
    is_done: bool,
    is_section: bool,
    position: i64,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ChecklistRow> for Checklist {
    type Error = DbError;

    fn try_from(r: ChecklistRow) -> DbErrorResult<Self> {
        Ok(Checklist {
            id: r.id,
            issue_id: r.issue_id,
            subject: r.subject,
            is_done: r.is_done,
            is_section: r.is_section,
            position: i32::try_from(r.position)
                .map_err(|e| DbError::invalid_row(TABLE, format!("position: {e}")))?,
            created_at: timestamp(TABLE, r.created_at)?,
            updated_at: timestamp(TABLE, r.updated_at)?,
        })
    }
}

/// Checklist item storage. Stateless; every call takes the executor to run on
/// so it can join a caller's transaction.
pub struct ChecklistRepository;

impl ChecklistRepository {
    /// Insert a new item and return it with its assigned id.
    ///
    /// Items without a position are appended after the issue's last item.
    /// Fails with `DbError::PositionOutOfRange`, writing nothing, when that
    /// slot would not fit in an `i32`.
    pub async fn create<'e, E>(executor: E, item: &NewChecklist) -> DbErrorResult<Checklist>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, ChecklistRow>(
            r#"
              INSERT INTO checklists (
                  issue_id, subject, is_done, is_section, position,
                  created_at, updated_at
              )
              SELECT ?, ?, ?, ?, next.position, ?, ?
              FROM (
                  SELECT COALESCE(
                      ?,
                      (SELECT COALESCE(MAX(position), 0) + 1 FROM checklists WHERE issue_id = ?)
                  ) AS position
              ) AS next
              WHERE next.position <= ?
              RETURNING id, issue_id, subject, is_done, is_section, position,
                        created_at, updated_at
              "#,
        )
        .bind(item.issue_id)
        .bind(&item.subject)
        .bind(item.is_done)
        .bind(item.is_section)
        .bind(now)
        .bind(now)
        .bind(item.position)
        .bind(item.issue_id)
        .bind(i64::from(i32::MAX))
        .fetch_optional(executor)
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => Err(DbError::position_out_of_range(item.issue_id)),
        }
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Checklist>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ChecklistRow>(
            r#"
              SELECT id, issue_id, subject, is_done, is_section, position,
                     created_at, updated_at
              FROM checklists
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(Checklist::try_from).transpose()
    }

    /// All items of an issue in display order
    pub async fn find_by_issue<'e, E>(executor: E, issue_id: i64) -> DbErrorResult<Vec<Checklist>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query_as::<_, ChecklistRow>(
            r#"
              SELECT id, issue_id, subject, is_done, is_section, position,
                     created_at, updated_at
              FROM checklists
              WHERE issue_id = ?
              ORDER BY position ASC, id ASC
              "#,
        )
        .bind(issue_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(Checklist::try_from).collect()
    }

    /// Persist the mutable fields. `issue_id` is never written.
    pub async fn update<'e, E>(executor: E, item: &Checklist) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let updated_at = item.updated_at.timestamp();

        sqlx::query(
            r#"
              UPDATE checklists
              SET subject = ?, is_done = ?, is_section = ?, position = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&item.subject)
        .bind(item.is_done)
        .bind(item.is_section)
        .bind(item.position)
        .bind(updated_at)
        .bind(item.id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM checklists WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
