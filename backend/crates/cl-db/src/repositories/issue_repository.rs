use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use cl_core::Issue;

use chrono::Utc;

const TABLE: &str = "issues";

#[derive(sqlx::FromRow)]
struct IssueRow {
    id: i64,
    project_id: i64,
    subject: String,
    done_ratio: i64,
    updated_at: i64,
}

impl TryFrom<IssueRow> for Issue {
    type Error = DbError;

    fn try_from(r: IssueRow) -> DbErrorResult<Self> {
        Ok(Issue {
            id: r.id,
            project_id: r.project_id,
            subject: r.subject,
            done_ratio: i32::try_from(r.done_ratio)
                .map_err(|e| DbError::invalid_row(TABLE, format!("done_ratio: {e}")))?,
            updated_at: timestamp(TABLE, r.updated_at)?,
        })
    }
}

pub struct IssueRepository;

impl IssueRepository {
    pub async fn create<'e, E>(executor: E, project_id: i64, subject: &str) -> DbErrorResult<Issue>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, IssueRow>(
            r#"
              INSERT INTO issues (project_id, subject, done_ratio, updated_at)
              VALUES (?, ?, 0, ?)
              RETURNING id, project_id, subject, done_ratio, updated_at
              "#,
        )
        .bind(project_id)
        .bind(subject)
        .bind(now)
        .fetch_one(executor)
        .await?;

        row.try_into()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Issue>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, IssueRow>(
            r#"
              SELECT id, project_id, subject, done_ratio, updated_at
              FROM issues
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(Issue::try_from).transpose()
    }

    pub async fn update_done_ratio<'e, E>(
        executor: E,
        id: i64,
        done_ratio: i32,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let now = Utc::now().timestamp();

        sqlx::query("UPDATE issues SET done_ratio = ?, updated_at = ? WHERE id = ?")
            .bind(done_ratio)
            .bind(now)
            .bind(id)
            .execute(executor)
            .await?;

        Ok(())
    }
}
